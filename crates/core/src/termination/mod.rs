//! Two-step agreement termination: quote first, settle on confirm.

mod termination_errors;
mod termination_model;
mod termination_service;
mod termination_traits;

pub use termination_errors::TerminationError;
pub use termination_model::{TerminationQuote, TerminationReceipt};
pub use termination_service::TerminationService;
pub use termination_traits::TerminationServiceTrait;
