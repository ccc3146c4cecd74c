use async_trait::async_trait;

use super::rebalance_editor::RebalanceEditor;
use crate::errors::Result;
use crate::portfolios::Portfolio;

#[async_trait]
pub trait RebalanceServiceTrait: Send + Sync {
    /// Opens an editor for a portfolio with no request attached.
    fn open_for_portfolio(&self, portfolio_id: &str) -> Result<RebalanceEditor>;

    /// Opens an editor for the portfolio named by a rebalancing request.
    fn open_for_request(&self, request_id: &str) -> Result<RebalanceEditor>;

    /// Writes the editor's weights back to the portfolio.
    async fn apply(&self, editor: RebalanceEditor) -> Result<Portfolio>;

    /// Accepts the engine's own proposal without manual edits.
    async fn auto_rebalance(&self, request_id: &str) -> Result<Portfolio>;
}
