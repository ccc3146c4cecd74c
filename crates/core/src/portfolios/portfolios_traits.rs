use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolios::portfolios_model::{NewPortfolio, Portfolio, Subscriber};

/// Trait for portfolio gallery operations
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    fn list_portfolios(&self) -> Result<Vec<Portfolio>>;
    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;
    fn find_by_name(&self, name: &str) -> Result<Portfolio>;
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio>;
    fn subscribers(&self, portfolio_id: &str) -> Result<Vec<Subscriber>>;
}
