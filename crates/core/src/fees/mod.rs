//! Fee templates - static reference data.

mod fees_model;
mod fees_service;

pub use fees_model::{FeeTemplate, FeeType};
pub use fees_service::FeeService;
