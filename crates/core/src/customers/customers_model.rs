//! Customer domain models.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};
use crate::i18n::Locale;

/// Suitability class assigned by KYC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskPreference {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskPreference {
    pub fn label_key(&self) -> &'static str {
        match self {
            RiskPreference::Conservative => "risk_con",
            RiskPreference::Balanced => "risk_bal",
            RiskPreference::Aggressive => "risk_agg",
        }
    }
}

impl FromStr for RiskPreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CONSERVATIVE" => Ok(RiskPreference::Conservative),
            "BALANCED" => Ok(RiskPreference::Balanced),
            "AGGRESSIVE" => Ok(RiskPreference::Aggressive),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown risk preference '{}'",
                other
            )))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Active,
    Pending,
    Inactive,
}

impl CustomerStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "status_active",
            CustomerStatus::Pending => "status_pending",
            CustomerStatus::Inactive => "status_inactive",
        }
    }
}

impl FromStr for CustomerStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(CustomerStatus::Active),
            "PENDING" => Ok(CustomerStatus::Pending),
            "INACTIVE" => Ok(CustomerStatus::Inactive),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown customer status '{}'",
                other
            )))),
        }
    }
}

/// Domain model representing an investor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub email: String,
    pub phone: String,
    pub risk_preference: RiskPreference,
    pub account_balance: Decimal,
    pub registration_date: NaiveDate,
    pub status: CustomerStatus,
}

impl Customer {
    /// Name as shown for the given locale.
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Zh => &self.name,
            Locale::En => &self.name_en,
        }
    }
}

/// Client roster tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerFilter {
    #[default]
    All,
    Status(CustomerStatus),
}

impl CustomerFilter {
    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            CustomerFilter::All => true,
            CustomerFilter::Status(status) => customer.status == *status,
        }
    }
}

impl FromStr for CustomerFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CustomerFilter::All);
        }
        s.parse::<CustomerStatus>().map(CustomerFilter::Status)
    }
}
