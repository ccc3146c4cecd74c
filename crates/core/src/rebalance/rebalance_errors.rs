use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RebalanceError {
    #[error("Weights must sum to 100% before applying. Current sum: {0:.2}%")]
    Unbalanced(Decimal),

    #[error("Request '{0}' is not a rebalancing proposal")]
    NotRebalancing(String),

    #[error("Request '{0}' does not name a portfolio")]
    MissingPortfolio(String),

    #[error("No fund at row {0}")]
    UnknownFund(usize),
}
