//! Core error types for the WealthPulse workbench.
//!
//! Workflow guards (empty market view, weights that do not add up to 100,
//! illegal step transitions, resolving an archived request) are reported as
//! typed errors and never leave the shared state half-mutated.

use std::num::ParseIntError;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::portfolios::PortfolioError;
use crate::rebalance::RebalanceError;
use crate::requests::RequestError;
use crate::termination::TerminationError;
use crate::wizard::WizardError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the workbench.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Portfolio operation failed: {0}")]
    Portfolio(#[from] PortfolioError),

    #[error("Portfolio wizard: {0}")]
    Wizard(#[from] WizardError),

    #[error("Rebalance failed: {0}")]
    Rebalance(#[from] RebalanceError),

    #[error("Review request: {0}")]
    Request(#[from] RequestError),

    #[error("Termination failed: {0}")]
    Termination(#[from] TerminationError),

    #[error("Allocation advisor failed: {0}")]
    Advisor(String),

    #[error("Application state error: {0}")]
    State(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Weights must sum to 100%. Current sum: {0:.2}%")]
    UnbalancedWeights(Decimal),

    #[error("Weight {0} is outside 0..=100")]
    WeightOutOfRange(Decimal),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse integer: {0}")]
    IntegerParse(#[from] ParseIntError),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Unexpected(format!("Commit task did not complete: {}", err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
