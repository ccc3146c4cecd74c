use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::advisor_model::{AssetClassWeight, TargetAllocation};
use super::advisor_traits::AllocationAdvisor;
use crate::errors::{Error, Result, ValidationError};

const EQUITY: &str = "Equity";
const FIXED_INCOME: &str = "Fixed Income";
const ALTERNATIVES: &str = "Alternatives";
const CASH: &str = "Cash";

/// (keywords, [equity, fixed income, alternatives, cash])
const VIEW_TABLE: &[(&[&str], [i64; 4])] = &[
    (&["defensive", "recession", "bear", "防御", "衰退", "避险"], [25, 50, 10, 15]),
    (&["inflation", "commodity", "gold", "通胀", "商品", "黄金"], [35, 20, 35, 10]),
    (&["esg", "green", "clean", "绿色", "低碳", "新能源"], [50, 35, 10, 5]),
    (&["tech", "growth", "ai", "bull", "科技", "成长", "牛市"], [60, 15, 15, 10]),
];

const DEFAULT_SPLIT: [i64; 4] = [45, 30, 15, 10];

/// Fixed lookup from market-view keywords to an asset-class split.
///
/// The first matching row wins; views that match nothing get the balanced
/// default. Every row sums to 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAllocationAdvisor;

impl KeywordAllocationAdvisor {
    pub fn new() -> Self {
        Self
    }

    fn split_for(view: &str) -> [i64; 4] {
        let lowered = view.to_lowercase();
        VIEW_TABLE
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(_, split)| *split)
            .unwrap_or(DEFAULT_SPLIT)
    }
}

#[async_trait]
impl AllocationAdvisor for KeywordAllocationAdvisor {
    async fn propose_allocation(&self, view: &str) -> Result<TargetAllocation> {
        let view = view.trim();
        if view.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "marketView".to_string(),
            )));
        }
        let split = Self::split_for(view);
        debug!("Market view mapped to split {:?}", split);
        let classes = [EQUITY, FIXED_INCOME, ALTERNATIVES, CASH]
            .iter()
            .zip(split)
            .map(|(class, weight)| AssetClassWeight {
                asset_class: class.to_string(),
                weight: Decimal::from(weight),
            })
            .collect();
        Ok(TargetAllocation {
            view: view.to_string(),
            classes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_every_row_sums_to_hundred() {
        for (_, split) in VIEW_TABLE {
            assert_eq!(split.iter().sum::<i64>(), 100);
        }
        assert_eq!(DEFAULT_SPLIT.iter().sum::<i64>(), 100);
    }

    #[tokio::test]
    async fn test_keyword_match() {
        let advisor = KeywordAllocationAdvisor::new();
        let allocation = advisor
            .propose_allocation("Expect a recession in H2")
            .await
            .unwrap();
        assert_eq!(allocation.classes[1].asset_class, FIXED_INCOME);
        assert_eq!(allocation.classes[1].weight, dec!(50));
        assert!(allocation.is_balanced());

        let zh = advisor.propose_allocation("看好科技板块").await.unwrap();
        assert_eq!(zh.classes[0].weight, dec!(60));
    }

    #[tokio::test]
    async fn test_default_and_empty_view() {
        let advisor = KeywordAllocationAdvisor::new();
        let allocation = advisor.propose_allocation("sideways market").await.unwrap();
        assert_eq!(allocation.classes[0].weight, dec!(45));
        assert!(advisor.propose_allocation("   ").await.is_err());
    }
}
