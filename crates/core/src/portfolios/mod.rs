//! Portfolios module - the strategy gallery.

mod portfolios_errors;
mod portfolios_model;
mod portfolios_service;
mod portfolios_traits;

pub use portfolios_errors::PortfolioError;
pub use portfolios_model::{FundAllocation, NewPortfolio, Portfolio, Subscriber};
pub use portfolios_service::PortfolioService;
pub use portfolios_traits::PortfolioServiceTrait;
