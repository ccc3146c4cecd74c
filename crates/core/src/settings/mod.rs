//! Workbench settings: delays, locale and settlement policies.

mod settings_model;

pub use settings_model::*;
