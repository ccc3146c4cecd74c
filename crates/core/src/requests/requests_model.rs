//! Review request (compliance queue) domain models.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    TransferIn,
    TransferOut,
    Rebalancing,
    Termination,
    KycExpired,
    DriftAlert,
}

impl RequestType {
    /// Prefix used when minting request ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            RequestType::Rebalancing | RequestType::DriftAlert => "AI",
            RequestType::TransferIn | RequestType::TransferOut => "TX",
            RequestType::Termination => "TM",
            RequestType::KycExpired => "KYC",
        }
    }

    pub fn info(&self) -> RequestTypeInfo {
        let (label_key, is_ai, is_notice) = match self {
            RequestType::TransferIn => ("req_transfer_in", false, false),
            RequestType::TransferOut => ("req_transfer_out", false, true),
            RequestType::Rebalancing => ("req_rebalancing", true, false),
            RequestType::Termination => ("req_termination", false, false),
            RequestType::KycExpired => ("req_kyc_expired", false, true),
            RequestType::DriftAlert => ("req_drift_alert", true, false),
        };
        RequestTypeInfo {
            label_key,
            is_ai,
            is_notice,
        }
    }
}

/// Badge information shown next to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTypeInfo {
    pub label_key: &'static str,
    /// Raised by the algorithmic engine rather than a customer
    pub is_ai: bool,
    /// Informational only; the operator acknowledges rather than approves
    pub is_notice: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Submitted,
    Validating,
    Auditing,
    Success,
    Failed,
}

impl RequestStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Success | RequestStatus::Failed)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RequestStatus::Validating | RequestStatus::Auditing)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            RequestStatus::Submitted => "req_status_submitted",
            RequestStatus::Validating => "req_status_validating",
            RequestStatus::Auditing => "req_status_auditing",
            RequestStatus::Success => "req_status_success",
            RequestStatus::Failed => "req_status_failed",
        }
    }

    /// Next status of the intake pipeline, if any.
    pub fn next_intake_stage(&self) -> Option<RequestStatus> {
        match self {
            RequestStatus::Submitted => Some(RequestStatus::Validating),
            RequestStatus::Validating => Some(RequestStatus::Auditing),
            _ => None,
        }
    }
}

/// Audit / compliance queue item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub portfolio_name: Option<String>,
    /// Free-text rationale
    pub description: Option<String>,
    pub suitability_passed: bool,
}

impl ReviewRequest {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Input model for appending a request to the queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReviewRequest {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    /// Defaults to `SUBMITTED`
    pub status: Option<RequestStatus>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub portfolio_name: Option<String>,
    pub description: Option<String>,
    pub suitability_passed: bool,
}

impl NewReviewRequest {
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Request amount cannot be negative".to_string(),
            )));
        }
        if self.request_type == RequestType::Rebalancing
            && self
                .portfolio_name
                .as_deref()
                .map_or(true, |n| n.trim().is_empty())
        {
            return Err(Error::Validation(ValidationError::MissingField(
                "portfolioName".to_string(),
            )));
        }
        Ok(())
    }

    pub fn into_request(self, id: String) -> ReviewRequest {
        ReviewRequest {
            id,
            request_type: self.request_type,
            status: self.status.unwrap_or(RequestStatus::Submitted),
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            amount: self.amount,
            date: self.date,
            portfolio_name: self.portfolio_name,
            description: self.description,
            suitability_passed: self.suitability_passed,
        }
    }
}

/// Partition of the queue shown by the two tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueView {
    #[default]
    Active,
    History,
}

impl QueueView {
    pub fn contains(&self, request: &ReviewRequest) -> bool {
        match self {
            QueueView::Active => request.status.is_active(),
            QueueView::History => request.status.is_terminal(),
        }
    }
}

/// Operator verdict on a non-rebalancing active request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewDecision {
    Accept,
    Reject,
}

impl ReviewDecision {
    pub fn outcome(&self) -> RequestStatus {
        match self {
            ReviewDecision::Accept => RequestStatus::Success,
            ReviewDecision::Reject => RequestStatus::Failed,
        }
    }
}

impl FromStr for ReviewDecision {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept" | "approve" | "acknowledge" => Ok(ReviewDecision::Accept),
            "reject" | "deny" => Ok(ReviewDecision::Reject),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown decision '{}'",
                other
            )))),
        }
    }
}

/// What the operator can do with a request in its current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ReviewAction {
    /// Still in intake; must be advanced before review
    AwaitingIntake,
    /// Rebalancing proposals open the rebalance editor
    GoToReview { portfolio_name: Option<String> },
    /// Binary accept / reject
    Decide,
    /// Terminal; read-only
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QueueCounts {
    pub intake: usize,
    pub active: usize,
    pub history: usize,
}
