//! Dashboard figures derived from the current state.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::agreements::AgreementStatus;
use crate::customers::CustomerStatus;
use crate::requests::QueueView;
use crate::state::WorkbenchState;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCounts {
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchSummary {
    pub total_aum: Decimal,
    pub portfolio_count: usize,
    pub active_requests: usize,
    pub archived_requests: usize,
    pub customers: CustomerCounts,
    pub signed_agreements: usize,
    pub signed_amount: Decimal,
    pub balance: Decimal,
    /// Largest drift across the gallery, if any portfolio exists
    pub max_deviation: Option<Decimal>,
}

impl WorkbenchSummary {
    pub fn from_state(state: &WorkbenchState) -> Self {
        let customers = state
            .customers
            .iter()
            .fold(CustomerCounts::default(), |mut acc, c| {
                match c.status {
                    CustomerStatus::Active => acc.active += 1,
                    CustomerStatus::Pending => acc.pending += 1,
                    CustomerStatus::Inactive => acc.inactive += 1,
                }
                acc
            });
        let signed: Vec<_> = state
            .agreements
            .iter()
            .filter(|a| a.status == AgreementStatus::Signed)
            .collect();

        Self {
            total_aum: state.portfolios.iter().map(|p| p.aum).sum(),
            portfolio_count: state.portfolios.len(),
            active_requests: state
                .requests
                .iter()
                .filter(|r| QueueView::Active.contains(r))
                .count(),
            archived_requests: state
                .requests
                .iter()
                .filter(|r| QueueView::History.contains(r))
                .count(),
            customers,
            signed_agreements: signed.len(),
            signed_amount: signed.iter().map(|a| a.amount).sum(),
            balance: state.balance,
            max_deviation: state.portfolios.iter().map(|p| p.deviation).max(),
        }
    }
}
