use async_trait::async_trait;

use super::advisor_model::{
    BacktestReport, CandidateFund, FactorWeights, TargetAllocation,
};
use crate::errors::Result;
use crate::portfolios::FundAllocation;

/// Turns a free-text market view into an asset-class allocation.
#[async_trait]
pub trait AllocationAdvisor: Send + Sync {
    async fn propose_allocation(&self, view: &str) -> Result<TargetAllocation>;
}

/// Picks concrete funds for an allocation under the given factor weights.
#[async_trait]
pub trait FundSelector: Send + Sync {
    async fn select_funds(
        &self,
        allocation: &TargetAllocation,
        factors: &FactorWeights,
    ) -> Result<Vec<CandidateFund>>;
}

/// Evaluates a set of holdings over a simulated history.
#[async_trait]
pub trait BacktestEngine: Send + Sync {
    async fn run(&self, holdings: &[FundAllocation]) -> Result<BacktestReport>;
}
