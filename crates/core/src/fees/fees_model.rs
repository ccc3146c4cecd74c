//! Fee template reference data.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    Management,
    Performance,
    Custodian,
}

impl FeeType {
    pub fn label_key(&self) -> &'static str {
        match self {
            FeeType::Management => "fee_management",
            FeeType::Performance => "fee_performance",
            FeeType::Custodian => "fee_custodian",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub fee_type: FeeType,
    /// Rate in percent (0.8 means 0.8%)
    pub rate: Decimal,
}

impl FeeTemplate {
    /// Yearly charge of this template on `aum`.
    pub fn annual_charge(&self, aum: Decimal) -> Decimal {
        aum * self.rate / dec!(100)
    }
}
