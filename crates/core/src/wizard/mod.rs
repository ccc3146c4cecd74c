//! Portfolio construction wizard.
//!
//! Four linear steps: market view, factor configuration, holdings draft and
//! backtest result. The only backward move is from the holdings draft to the
//! factor configuration. Nothing outside the wizard changes until `publish`.

mod wizard_errors;
mod wizard_model;
mod wizard_service;

pub use wizard_errors::WizardError;
pub use wizard_model::{PublishDetails, WizardState, WizardStep};
pub use wizard_service::PortfolioWizard;
