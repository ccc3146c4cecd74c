//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::requests::RequestStatus;

/// Facts about committed changes to the workbench state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A portfolio was appended to the gallery.
    PortfolioPublished {
        portfolio_id: String,
        name: String,
    },

    /// A portfolio's fund list was replaced or its drift reset.
    PortfolioRebalanced {
        portfolio_id: String,
        /// Request resolved by this rebalance, if any
        request_id: Option<String>,
    },

    /// A request entered the queue.
    RequestSubmitted { request_id: String },

    /// A request reached SUCCESS or FAILED.
    RequestResolved {
        request_id: String,
        status: RequestStatus,
    },

    /// An agreement was settled and removed from the holdings list.
    AgreementTerminated {
        agreement_id: String,
        fee: Decimal,
        net: Decimal,
    },

    LocaleSwitched { locale: Locale },
}

impl DomainEvent {
    pub fn portfolio_published(portfolio_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::PortfolioPublished {
            portfolio_id: portfolio_id.into(),
            name: name.into(),
        }
    }

    pub fn portfolio_rebalanced(portfolio_id: impl Into<String>, request_id: Option<String>) -> Self {
        Self::PortfolioRebalanced {
            portfolio_id: portfolio_id.into(),
            request_id,
        }
    }

    pub fn request_submitted(request_id: impl Into<String>) -> Self {
        Self::RequestSubmitted {
            request_id: request_id.into(),
        }
    }

    pub fn request_resolved(request_id: impl Into<String>, status: RequestStatus) -> Self {
        Self::RequestResolved {
            request_id: request_id.into(),
            status,
        }
    }

    pub fn agreement_terminated(agreement_id: impl Into<String>, fee: Decimal, net: Decimal) -> Self {
        Self::AgreementTerminated {
            agreement_id: agreement_id.into(),
            fee,
            net,
        }
    }

    pub fn locale_switched(locale: Locale) -> Self {
        Self::LocaleSwitched { locale }
    }
}
