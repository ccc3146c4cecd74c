use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Editable row of the rebalance editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundProposal {
    pub name: String,
    pub original_weight: Decimal,
    pub proposed_weight: Decimal,
}

impl FundProposal {
    pub fn delta(&self) -> Decimal {
        self.proposed_weight - self.original_weight
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundDelta {
    pub name: String,
    pub weight_delta: Decimal,
    /// `aum × weight_delta / 100`
    pub monetary_delta: Decimal,
}

/// Closed-form figures shown beside the editor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsightStats {
    /// Σ|proposed − original|
    pub diff_sum: Decimal,
    pub return_lift: Decimal,
    pub vol_reduction: Decimal,
    pub sharpe_lift: Decimal,
}

/// One bar of the simulated one-year return distribution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub index: usize,
    pub value: Decimal,
}
