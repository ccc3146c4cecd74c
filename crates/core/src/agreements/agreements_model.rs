//! Advisory agreement domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgreementStatus {
    Signed,
    Pending,
    Terminating,
    Terminated,
}

impl AgreementStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            AgreementStatus::Signed => "agreement_signed",
            AgreementStatus::Pending => "agreement_pending",
            AgreementStatus::Terminating => "agreement_terminating",
            AgreementStatus::Terminated => "agreement_terminated",
        }
    }
}

/// Advisory agreement signed when an investor subscribes to a strategy.
///
/// `strategy_name` is a weak reference to a portfolio by name; nothing
/// enforces that the portfolio still exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    pub id: String,
    pub customer_id: String,
    pub strategy_name: String,
    pub sign_date: NaiveDate,
    pub status: AgreementStatus,
    pub amount: Decimal,
}
