use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::advisor_model::{CandidateFund, Factor, FactorWeights, TargetAllocation};
use super::advisor_traits::FundSelector;
use crate::errors::{Error, Result};

struct UniverseFund {
    code: &'static str,
    name: &'static str,
    asset_class: &'static str,
    /// Per-factor metric on a 0..=100 scale: sharpe, alpha, vol (low is high), size
    metrics: [u8; 4],
}

const UNIVERSE: &[UniverseFund] = &[
    UniverseFund { code: "005827", name: "Blue Chip Select Equity", asset_class: "Equity", metrics: [78, 64, 55, 90] },
    UniverseFund { code: "161725", name: "Consumer Leaders Index", asset_class: "Equity", metrics: [70, 72, 48, 80] },
    UniverseFund { code: "110017", name: "Enhanced Bond A", asset_class: "Fixed Income", metrics: [85, 30, 92, 70] },
    UniverseFund { code: "000216", name: "Gold ETF Feeder", asset_class: "Alternatives", metrics: [52, 58, 60, 65] },
    UniverseFund { code: "003003", name: "Money Market Plus", asset_class: "Cash", metrics: [60, 10, 99, 95] },
];

/// Draft weights handed out by rank.
const RANK_WEIGHTS: [Decimal; 5] = [dec!(30), dec!(20), dec!(20), dec!(15), dec!(15)];

/// Ranks a fixed fund universe by factor-weighted score.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorFundSelector;

impl FactorFundSelector {
    pub fn new() -> Self {
        Self
    }

    fn score(fund: &UniverseFund, factors: &FactorWeights) -> Decimal {
        let slider_total: u32 = Factor::ALL.iter().map(|f| u32::from(factors.get(*f))).sum();
        let weighted: u32 = Factor::ALL
            .iter()
            .zip(fund.metrics)
            .map(|(f, metric)| {
                let slider = if slider_total == 0 { 1 } else { u32::from(factors.get(*f)) };
                slider * u32::from(metric)
            })
            .sum();
        let divisor = if slider_total == 0 { 4 } else { slider_total };
        (Decimal::from(weighted) / Decimal::from(divisor)).round_dp(1)
    }
}

#[async_trait]
impl FundSelector for FactorFundSelector {
    async fn select_funds(
        &self,
        allocation: &TargetAllocation,
        factors: &FactorWeights,
    ) -> Result<Vec<CandidateFund>> {
        if allocation.classes.is_empty() {
            return Err(Error::Advisor("allocation has no asset classes".to_string()));
        }
        let mut ranked: Vec<(&UniverseFund, Decimal)> = UNIVERSE
            .iter()
            .map(|fund| (fund, Self::score(fund, factors)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.code.cmp(b.0.code)));
        debug!(
            "Selected {} funds for view '{}' with factors {:?}",
            ranked.len(),
            allocation.view,
            factors
        );

        Ok(ranked
            .into_iter()
            .zip(RANK_WEIGHTS)
            .map(|((fund, score), weight)| CandidateFund {
                code: fund.code.to_string(),
                name: fund.name.to_string(),
                asset_class: fund.asset_class.to_string(),
                weight,
                score,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::AssetClassWeight;
    use crate::weights::{is_balanced, total_weight};

    fn allocation() -> TargetAllocation {
        TargetAllocation {
            view: "neutral".to_string(),
            classes: vec![AssetClassWeight {
                asset_class: "Equity".to_string(),
                weight: dec!(100),
            }],
        }
    }

    #[tokio::test]
    async fn test_selected_weights_sum_to_hundred() {
        let funds = FactorFundSelector::new()
            .select_funds(&allocation(), &FactorWeights::default())
            .await
            .unwrap();
        assert_eq!(funds.len(), 5);
        assert!(is_balanced(total_weight(funds.iter().map(|f| &f.weight))));
        assert!(funds.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn test_factor_weights_change_ranking() {
        let selector = FactorFundSelector::new();
        let mut factors = FactorWeights {
            sharpe: 0,
            alpha: 100,
            vol: 0,
            size: 0,
        };
        let alpha_first = selector.select_funds(&allocation(), &factors).await.unwrap();
        assert_eq!(alpha_first[0].code, "161725");

        factors.set(Factor::Alpha, 0);
        factors.set(Factor::Vol, 100);
        let low_vol_first = selector.select_funds(&allocation(), &factors).await.unwrap();
        assert_eq!(low_vol_first[0].code, "003003");
    }

    #[test]
    fn test_all_zero_sliders_fall_back_to_plain_average() {
        let zero = FactorWeights {
            sharpe: 0,
            alpha: 0,
            vol: 0,
            size: 0,
        };
        assert_eq!(FactorFundSelector::score(&UNIVERSE[0], &zero), dec!(71.8));
    }
}
