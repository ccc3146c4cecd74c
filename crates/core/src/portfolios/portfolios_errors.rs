//! Portfolio gallery error types.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Portfolio not found: {0}")]
    NotFound(String),

    #[error("No portfolio named '{0}'")]
    NameNotFound(String),

    #[error("Portfolio id '{0}' already exists")]
    DuplicateId(String),

    #[error("Fund weights of '{id}' sum to {total:.2}%, expected 100%")]
    UnbalancedFunds { id: String, total: Decimal },
}
