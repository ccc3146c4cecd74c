//! Manual strategy template form.

mod template_form;

pub use template_form::{AssetRow, ChecklistItem, StrategyTemplateForm};
