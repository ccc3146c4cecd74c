//! Workbench settings.

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BACKTEST_DELAY_MS, DEFAULT_OPENING_BALANCE, DEFAULT_REBALANCE_DELAY_MS,
    DEFAULT_SETTLEMENT_DELAY_MS,
};
use crate::errors::Error;
use crate::i18n::Locale;

/// How a confirmed termination moves cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementMode {
    /// Only the termination fee is debited; the principal leaves with the
    /// holding and is never credited to the cash balance.
    #[default]
    FeeOnly,
    /// The fee is debited and the net principal is credited back.
    CreditNet,
}

impl FromStr for SettlementMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fee_only" => Ok(SettlementMode::FeeOnly),
            "credit_net" => Ok(SettlementMode::CreditNet),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown settlement mode '{}'",
                other
            ))),
        }
    }
}

/// How the backtest verdict is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictPolicy {
    /// Derived from drawdown and volatility of the simulated series.
    #[default]
    Computed,
    /// Always PASS regardless of the series.
    AlwaysPass,
}

impl FromStr for VerdictPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "computed" => Ok(VerdictPolicy::Computed),
            "always_pass" => Ok(VerdictPolicy::AlwaysPass),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown verdict policy '{}'",
                other
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchSettings {
    pub locale: Locale,
    pub settlement_delay_ms: u64,
    pub rebalance_delay_ms: u64,
    pub backtest_delay_ms: u64,
    /// Fixed seed for reproducible backtests; entropy when absent
    pub backtest_seed: Option<u64>,
    pub opening_balance: Decimal,
    pub settlement_mode: SettlementMode,
    pub verdict_policy: VerdictPolicy,
}

impl Default for WorkbenchSettings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            settlement_delay_ms: DEFAULT_SETTLEMENT_DELAY_MS,
            rebalance_delay_ms: DEFAULT_REBALANCE_DELAY_MS,
            backtest_delay_ms: DEFAULT_BACKTEST_DELAY_MS,
            backtest_seed: None,
            opening_balance: DEFAULT_OPENING_BALANCE,
            settlement_mode: SettlementMode::default(),
            verdict_policy: VerdictPolicy::default(),
        }
    }
}

impl WorkbenchSettings {
    /// Settings with every simulated delay disabled.
    pub fn instant() -> Self {
        Self {
            settlement_delay_ms: 0,
            rebalance_delay_ms: 0,
            backtest_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn settlement_delay(&self) -> Duration {
        Duration::from_millis(self.settlement_delay_ms)
    }

    pub fn rebalance_delay(&self) -> Duration {
        Duration::from_millis(self.rebalance_delay_ms)
    }

    pub fn backtest_delay(&self) -> Duration {
        Duration::from_millis(self.backtest_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_observed_behaviour() {
        let settings = WorkbenchSettings::default();
        assert_eq!(settings.settlement_mode, SettlementMode::FeeOnly);
        assert_eq!(settings.verdict_policy, VerdictPolicy::Computed);
        assert_eq!(settings.rebalance_delay(), Duration::from_millis(2000));
        assert_eq!(settings.locale, Locale::Zh);
    }

    #[test]
    fn test_instant_has_no_delays() {
        let settings = WorkbenchSettings::instant();
        assert_eq!(settings.settlement_delay(), Duration::ZERO);
        assert_eq!(settings.backtest_delay(), Duration::ZERO);
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!(
            "credit-net".parse::<SettlementMode>().unwrap(),
            SettlementMode::CreditNet
        );
        assert_eq!(
            "ALWAYS_PASS".parse::<VerdictPolicy>().unwrap(),
            VerdictPolicy::AlwaysPass
        );
        assert!("sometimes".parse::<VerdictPolicy>().is_err());
    }
}
