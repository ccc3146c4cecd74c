//! Manual rebalance editor and the commit path for rebalancing proposals.

mod rebalance_editor;
mod rebalance_errors;
mod rebalance_model;
mod rebalance_service;
mod rebalance_traits;

pub use rebalance_editor::RebalanceEditor;
pub use rebalance_errors::RebalanceError;
pub use rebalance_model::{FundDelta, FundProposal, InsightStats, ProjectionPoint};
pub use rebalance_service::RebalanceService;
pub use rebalance_traits::RebalanceServiceTrait;
