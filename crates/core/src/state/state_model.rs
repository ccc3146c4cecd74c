//! Application state and the closed set of actions that mutate it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::agreements::Agreement;
use crate::customers::Customer;
use crate::fees::FeeTemplate;
use crate::i18n::Locale;
use crate::portfolios::{FundAllocation, Portfolio};
use crate::requests::{RequestStatus, RequestType, ReviewRequest};

/// Everything the workbench screens share.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchState {
    pub locale: Locale,
    /// Cash balance of the operating account
    pub balance: Decimal,
    pub customers: Vec<Customer>,
    pub portfolios: Vec<Portfolio>,
    pub agreements: Vec<Agreement>,
    pub requests: Vec<ReviewRequest>,
    pub fee_templates: Vec<FeeTemplate>,
    /// Sequence number for the next minted request id
    pub next_request_seq: u32,
}

impl WorkbenchState {
    pub fn portfolio(&self, id: &str) -> Option<&Portfolio> {
        self.portfolios.iter().find(|p| p.id == id)
    }

    pub fn portfolio_by_name(&self, name: &str) -> Option<&Portfolio> {
        self.portfolios.iter().find(|p| p.name == name)
    }

    pub fn request(&self, id: &str) -> Option<&ReviewRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn agreement(&self, id: &str) -> Option<&Agreement> {
        self.agreements.iter().find(|a| a.id == id)
    }

    /// Id the next appended request of `request_type` would get.
    pub fn peek_request_id(&self, request_type: RequestType, date: NaiveDate) -> String {
        format!(
            "{}-{}-{:03}",
            request_type.id_prefix(),
            date.format("%Y%m%d"),
            self.next_request_seq
        )
    }
}

/// State mutations. `AppStore::dispatch` is the only way to apply them.
#[derive(Debug, Clone, PartialEq)]
pub enum StateAction {
    PortfolioAppended(Portfolio),
    PortfolioFundsReplaced {
        portfolio_id: String,
        funds: Vec<FundAllocation>,
        deviation: Decimal,
    },
    PortfolioDeviationReset {
        portfolio_id: String,
        deviation: Decimal,
    },
    RequestAppended(ReviewRequest),
    RequestStatusChanged {
        request_id: String,
        status: RequestStatus,
    },
    AgreementRemoved {
        agreement_id: String,
    },
    BalanceDebited(Decimal),
    BalanceCredited(Decimal),
    LocaleSwitched(Locale),
}

impl StateAction {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            StateAction::PortfolioAppended(_) => "portfolio_appended",
            StateAction::PortfolioFundsReplaced { .. } => "portfolio_funds_replaced",
            StateAction::PortfolioDeviationReset { .. } => "portfolio_deviation_reset",
            StateAction::RequestAppended(_) => "request_appended",
            StateAction::RequestStatusChanged { .. } => "request_status_changed",
            StateAction::AgreementRemoved { .. } => "agreement_removed",
            StateAction::BalanceDebited(_) => "balance_debited",
            StateAction::BalanceCredited(_) => "balance_credited",
            StateAction::LocaleSwitched(_) => "locale_switched",
        }
    }
}
