//! Portfolio domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::customers::RiskPreference;
use crate::errors::{Error, Result, ValidationError};
use crate::weights::{is_balanced, total_weight};

/// One fund line of a portfolio. `weight` is a percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundAllocation {
    pub name: String,
    pub weight: Decimal,
}

impl FundAllocation {
    pub fn new(name: impl Into<String>, weight: Decimal) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Holding record linking a customer to a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub customer_id: String,
    pub customer_name: String,
    pub invested: Decimal,
    /// Signed cumulative profit and loss
    pub profit_and_loss: Decimal,
    pub since: NaiveDate,
}

/// Domain model representing a strategy portfolio in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    pub risk: RiskPreference,
    pub aum: Decimal,
    pub funds: Vec<FundAllocation>,
    #[serde(default)]
    pub subscribers: Vec<Subscriber>,
    /// Drift of the live allocation from the target, in percent
    #[serde(default)]
    pub deviation: Decimal,
    pub description: Option<String>,
}

impl Portfolio {
    pub fn total_weight(&self) -> Decimal {
        total_weight(self.funds.iter().map(|f| &f.weight))
    }

    pub fn is_balanced(&self) -> bool {
        is_balanced(self.total_weight())
    }

    pub fn total_invested(&self) -> Decimal {
        self.subscribers.iter().map(|s| s.invested).sum()
    }
}

/// Input model for adding a portfolio to the gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub risk: RiskPreference,
    #[serde(default)]
    pub aum: Decimal,
    pub funds: Vec<FundAllocation>,
    pub description: Option<String>,
}

impl NewPortfolio {
    /// Validates the new portfolio data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Portfolio name cannot be empty".to_string(),
            )));
        }
        if self.funds.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "funds".to_string(),
            )));
        }
        if self.aum.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "AUM cannot be negative".to_string(),
            )));
        }
        if let Some(bad) = self
            .funds
            .iter()
            .find(|f| f.weight < Decimal::ZERO || f.weight > Decimal::ONE_HUNDRED)
        {
            return Err(Error::Validation(ValidationError::WeightOutOfRange(
                bad.weight,
            )));
        }
        let total = total_weight(self.funds.iter().map(|f| &f.weight));
        if !is_balanced(total) {
            return Err(Error::Validation(ValidationError::UnbalancedWeights(total)));
        }
        Ok(())
    }
}
