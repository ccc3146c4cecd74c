use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};
use crate::weights::{is_balanced, total_weight};

/// One asset-class line of a target allocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassWeight {
    pub asset_class: String,
    pub weight: Decimal,
}

/// Asset-class split derived from an operator's market view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetAllocation {
    pub view: String,
    pub classes: Vec<AssetClassWeight>,
}

impl TargetAllocation {
    pub fn total_weight(&self) -> Decimal {
        total_weight(self.classes.iter().map(|c| &c.weight))
    }

    pub fn is_balanced(&self) -> bool {
        is_balanced(self.total_weight())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Factor {
    Sharpe,
    Alpha,
    Vol,
    Size,
}

impl Factor {
    pub const ALL: [Factor; 4] = [Factor::Sharpe, Factor::Alpha, Factor::Vol, Factor::Size];

    pub fn label_key(&self) -> &'static str {
        match self {
            Factor::Sharpe => "ai_factor_sharpe",
            Factor::Alpha => "ai_factor_alpha",
            Factor::Vol => "ai_factor_vol",
            Factor::Size => "ai_factor_size",
        }
    }
}

impl FromStr for Factor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sharpe" => Ok(Factor::Sharpe),
            "alpha" => Ok(Factor::Alpha),
            "vol" | "volatility" => Ok(Factor::Vol),
            "size" => Ok(Factor::Size),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown factor '{}'",
                other
            )))),
        }
    }
}

/// Slider positions of the four selection factors, each 0..=100.
///
/// The factors are independent; they carry no sum constraint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FactorWeights {
    pub sharpe: u8,
    pub alpha: u8,
    pub vol: u8,
    pub size: u8,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            sharpe: 50,
            alpha: 50,
            vol: 50,
            size: 50,
        }
    }
}

impl FactorWeights {
    pub fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::Sharpe => self.sharpe,
            Factor::Alpha => self.alpha,
            Factor::Vol => self.vol,
            Factor::Size => self.size,
        }
    }

    /// Sets a factor, clamping to 100.
    pub fn set(&mut self, factor: Factor, value: u8) {
        let value = value.min(100);
        match factor {
            Factor::Sharpe => self.sharpe = value,
            Factor::Alpha => self.alpha = value,
            Factor::Vol => self.vol = value,
            Factor::Size => self.size = value,
        }
    }
}

/// Fund proposed by the selector, with its draft weight in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFund {
    pub code: String,
    pub name: String,
    pub asset_class: String,
    pub weight: Decimal,
    /// Factor-weighted score, 0..=100
    pub score: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BacktestPoint {
    /// Month index label, `M1`..`M36`
    pub period: String,
    /// Cumulative return of the draft portfolio
    pub portfolio: f64,
    /// Cumulative return of the benchmark
    pub benchmark: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BacktestStats {
    pub annualized_return: f64,
    pub annualized_volatility: f64,
    /// Largest peak-to-trough loss, as a positive fraction
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
    /// Final cumulative return over the benchmark
    pub excess_return: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BacktestVerdict {
    Pass,
    Fail,
}

impl BacktestVerdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, BacktestVerdict::Pass)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            BacktestVerdict::Pass => "ai_verdict_pass",
            BacktestVerdict::Fail => "ai_verdict_fail",
        }
    }
}

/// Risk limits a series must respect to pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerdictThresholds {
    pub max_drawdown: f64,
    pub max_volatility: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            max_drawdown: 0.20,
            max_volatility: 0.25,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BacktestReport {
    pub series: Vec<BacktestPoint>,
    pub stats: BacktestStats,
    pub verdict: BacktestVerdict,
}
