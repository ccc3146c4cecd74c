use std::str::FromStr;

use anyhow::{anyhow, Context};
use rust_decimal::Decimal;
use wealthpulse_core::i18n::Locale;
use wealthpulse_core::settings::{SettlementMode, VerdictPolicy, WorkbenchSettings};

pub struct Config {
    pub settings: WorkbenchSettings,
    pub log_format: String,
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("Invalid {}: {}", key, e)),
        _ => Ok(None),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = WorkbenchSettings::default();
        let settings = WorkbenchSettings {
            locale: parse_var::<Locale>(&lookup, "WP_LOCALE")?.unwrap_or(defaults.locale),
            settlement_delay_ms: parse_var(&lookup, "WP_SETTLEMENT_DELAY_MS")?
                .unwrap_or(defaults.settlement_delay_ms),
            rebalance_delay_ms: parse_var(&lookup, "WP_REBALANCE_DELAY_MS")?
                .unwrap_or(defaults.rebalance_delay_ms),
            backtest_delay_ms: parse_var(&lookup, "WP_BACKTEST_DELAY_MS")?
                .unwrap_or(defaults.backtest_delay_ms),
            backtest_seed: parse_var(&lookup, "WP_BACKTEST_SEED")?.or(defaults.backtest_seed),
            opening_balance: parse_var::<Decimal>(&lookup, "WP_OPENING_BALANCE")?
                .unwrap_or(defaults.opening_balance),
            settlement_mode: parse_var::<SettlementMode>(&lookup, "WP_SETTLEMENT_MODE")?
                .unwrap_or(defaults.settlement_mode),
            verdict_policy: parse_var::<VerdictPolicy>(&lookup, "WP_VERDICT_POLICY")?
                .unwrap_or(defaults.verdict_policy),
        };
        if settings.opening_balance.is_sign_negative() {
            return Err(anyhow!("Invalid WP_OPENING_BALANCE: must not be negative"));
        }
        let log_format = match lookup("WP_LOG_FORMAT") {
            None => "text".to_string(),
            Some(raw) => {
                let format = raw.trim().to_ascii_lowercase();
                if format != "text" && format != "json" {
                    return Err(anyhow!(
                        "Invalid WP_LOG_FORMAT '{}': expected text or json",
                        raw
                    ));
                }
                format
            }
        };
        Ok(Self {
            settings,
            log_format,
        })
    }

    pub fn with_locale(mut self, locale: Option<&str>) -> anyhow::Result<Self> {
        if let Some(raw) = locale {
            self.settings.locale = raw
                .parse()
                .with_context(|| format!("Invalid --locale '{}'", raw))?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.settings, WorkbenchSettings::default());
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("WP_LOCALE", "en"),
            ("WP_SETTLEMENT_DELAY_MS", "0"),
            ("WP_BACKTEST_SEED", "42"),
            ("WP_SETTLEMENT_MODE", "credit-net"),
            ("WP_VERDICT_POLICY", "always_pass"),
            ("WP_OPENING_BALANCE", "5000.50"),
        ]))
        .unwrap();
        assert_eq!(config.settings.locale, Locale::En);
        assert_eq!(config.settings.settlement_delay_ms, 0);
        assert_eq!(config.settings.backtest_seed, Some(42));
        assert_eq!(config.settings.settlement_mode, SettlementMode::CreditNet);
        assert_eq!(config.settings.verdict_policy, VerdictPolicy::AlwaysPass);
        assert_eq!(config.settings.opening_balance, Decimal::new(500050, 2));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(Config::from_lookup(lookup(&[("WP_REBALANCE_DELAY_MS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[("WP_LOCALE", "fr")])).is_err());
        assert!(Config::from_lookup(lookup(&[("WP_OPENING_BALANCE", "-1")])).is_err());
    }

    #[test]
    fn test_log_format_accepts_text_or_json_only() {
        let config = Config::from_lookup(lookup(&[("WP_LOG_FORMAT", "JSON")])).unwrap();
        assert_eq!(config.log_format, "json");
        assert!(Config::from_lookup(lookup(&[("WP_LOG_FORMAT", "xml")])).is_err());
        assert!(Config::from_lookup(lookup(&[("WP_LOG_FORMAT", "")])).is_err());
    }

    #[test]
    fn test_flag_overrides_locale() {
        let config = Config::from_lookup(lookup(&[("WP_LOCALE", "zh")]))
            .unwrap()
            .with_locale(Some("en"))
            .unwrap();
        assert_eq!(config.settings.locale, Locale::En);
    }
}
