use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::rebalance_errors::RebalanceError;
use super::rebalance_model::{FundDelta, FundProposal, InsightStats, ProjectionPoint};
use crate::constants::WEIGHT_TOTAL;
use crate::errors::Result;
use crate::i18n::{format_signed_percent, translate, translate_with, Locale};
use crate::portfolios::{FundAllocation, Portfolio};
use crate::weights::{clamp_weight, is_balanced, parse_weight_input, total_weight};

/// Base shape of the one-year return distribution chart.
const PROJECTION_BASE: [Decimal; 6] = [dec!(10), dec!(15), dec!(12), dec!(18), dec!(22), dec!(25)];

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Local draft of new weights for one portfolio.
///
/// Nothing is written until the draft is handed to `RebalanceService::apply`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceEditor {
    portfolio_id: String,
    portfolio_name: String,
    aum: Decimal,
    funds: Vec<FundProposal>,
    request_id: Option<String>,
}

impl RebalanceEditor {
    /// Opens an editor with every proposed weight equal to the current one.
    pub fn open(portfolio: &Portfolio) -> Self {
        Self {
            portfolio_id: portfolio.id.clone(),
            portfolio_name: portfolio.name.clone(),
            aum: portfolio.aum,
            funds: portfolio
                .funds
                .iter()
                .map(|f| FundProposal {
                    name: f.name.clone(),
                    original_weight: f.weight,
                    proposed_weight: f.weight,
                })
                .collect(),
            request_id: None,
        }
    }

    /// Opens an editor whose commit also resolves `request_id`.
    pub fn for_request(portfolio: &Portfolio, request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
            ..Self::open(portfolio)
        }
    }

    pub fn portfolio_id(&self) -> &str {
        &self.portfolio_id
    }

    pub fn portfolio_name(&self) -> &str {
        &self.portfolio_name
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn funds(&self) -> &[FundProposal] {
        &self.funds
    }

    /// Index of the row named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.funds.iter().position(|f| f.name == name)
    }

    /// Sets a proposed weight, clamped to 0..=100.
    pub fn set_weight(&mut self, index: usize, weight: Decimal) -> Result<()> {
        let fund = self
            .funds
            .get_mut(index)
            .ok_or(RebalanceError::UnknownFund(index))?;
        fund.proposed_weight = clamp_weight(weight);
        Ok(())
    }

    /// Raw field input: blank or non-numeric counts as 0.
    pub fn set_weight_input(&mut self, index: usize, raw: &str) -> Result<()> {
        self.set_weight(index, parse_weight_input(raw))
    }

    /// Restores every row to its original weight.
    pub fn reset(&mut self) {
        for fund in &mut self.funds {
            fund.proposed_weight = fund.original_weight;
        }
    }

    pub fn total_weight(&self) -> Decimal {
        total_weight(self.funds.iter().map(|f| &f.proposed_weight))
    }

    pub fn is_balanced(&self) -> bool {
        is_balanced(self.total_weight())
    }

    pub fn can_apply(&self) -> bool {
        !self.funds.is_empty() && self.is_balanced()
    }

    pub fn deltas(&self) -> Vec<FundDelta> {
        self.funds
            .iter()
            .map(|f| {
                let weight_delta = f.delta();
                FundDelta {
                    name: f.name.clone(),
                    weight_delta,
                    monetary_delta: self.aum * weight_delta / WEIGHT_TOTAL,
                }
            })
            .collect()
    }

    pub fn insight_stats(&self) -> InsightStats {
        let diff_sum: Decimal = self.funds.iter().map(|f| f.delta().abs()).sum();
        InsightStats {
            diff_sum,
            return_lift: round_half_up(dec!(1.2) + diff_sum * dec!(0.05), 1),
            vol_reduction: round_half_up(dec!(0.5) + diff_sum * dec!(0.02), 1),
            sharpe_lift: round_half_up(dec!(0.24) + diff_sum * dec!(0.01), 2),
        }
    }

    /// Commentary line: a prompt while unbalanced, the figures otherwise.
    pub fn insight(&self, locale: Locale) -> String {
        if !self.is_balanced() {
            return translate(locale, "rebalance_unbalanced").to_string();
        }
        let stats = self.insight_stats();
        translate_with(
            locale,
            "rebalance_insight",
            &[
                ("return_lift", format!("{:.1}", stats.return_lift)),
                ("vol_reduction", format!("{:.1}", stats.vol_reduction)),
            ],
        )
    }

    /// Six-point simulated distribution, scaled by `1 + (total − 100) / 500`.
    pub fn projection_series(&self) -> Vec<ProjectionPoint> {
        let scale = Decimal::ONE + (self.total_weight() - WEIGHT_TOTAL) / dec!(500);
        PROJECTION_BASE
            .iter()
            .enumerate()
            .map(|(index, base)| ProjectionPoint {
                index,
                value: *base * scale,
            })
            .collect()
    }

    /// Signed label for a row's weight change, e.g. `+10.0%`.
    pub fn delta_label(&self, index: usize) -> Option<String> {
        self.funds
            .get(index)
            .map(|f| format_signed_percent(f.delta(), 1))
    }

    /// Fund list that `apply` will write.
    pub fn proposed_funds(&self) -> Vec<FundAllocation> {
        self.funds
            .iter()
            .map(|f| FundAllocation::new(f.name.clone(), f.proposed_weight))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::RiskPreference;

    fn portfolio(weights: &[(&str, Decimal)]) -> Portfolio {
        Portfolio {
            id: "P01".to_string(),
            name: "Aggressive Alpha A1".to_string(),
            risk: RiskPreference::Aggressive,
            aum: dec!(42500000),
            funds: weights
                .iter()
                .map(|(n, w)| FundAllocation::new(*n, *w))
                .collect(),
            subscribers: vec![],
            deviation: dec!(4.2),
            description: None,
        }
    }

    #[test]
    fn test_unbalanced_edit_disables_apply() {
        let mut editor = RebalanceEditor::open(&portfolio(&[("A", dec!(60)), ("B", dec!(40))]));
        assert!(editor.can_apply());

        editor.set_weight(0, dec!(70)).unwrap();
        assert_eq!(editor.total_weight(), dec!(110));
        assert!(!editor.is_balanced());
        assert!(!editor.can_apply());

        editor.set_weight(1, dec!(30)).unwrap();
        assert!(editor.can_apply());
    }

    #[test]
    fn test_input_is_clamped_and_blank_is_zero() {
        let mut editor = RebalanceEditor::open(&portfolio(&[("A", dec!(60)), ("B", dec!(40))]));
        editor.set_weight_input(0, "250").unwrap();
        assert_eq!(editor.funds()[0].proposed_weight, dec!(100));
        editor.set_weight_input(1, "").unwrap();
        assert_eq!(editor.funds()[1].proposed_weight, dec!(0));
        editor.set_weight(0, dec!(-5)).unwrap();
        assert_eq!(editor.funds()[0].proposed_weight, dec!(0));
        assert!(editor.set_weight(9, dec!(1)).is_err());
    }

    #[test]
    fn test_monetary_delta_is_exact() {
        let mut editor = RebalanceEditor::open(&portfolio(&[("A", dec!(60)), ("B", dec!(40))]));
        editor.set_weight(0, dec!(55.5)).unwrap();
        editor.set_weight(1, dec!(44.5)).unwrap();
        let deltas = editor.deltas();
        assert_eq!(deltas[0].weight_delta, dec!(-4.5));
        assert_eq!(deltas[0].monetary_delta, dec!(-1912500));
        assert_eq!(deltas[1].monetary_delta, dec!(1912500));
        assert_eq!(editor.delta_label(0).as_deref(), Some("-4.5%"));
    }

    #[test]
    fn test_insight_stats_formulas() {
        let mut editor = RebalanceEditor::open(&portfolio(&[("A", dec!(60)), ("B", dec!(40))]));
        let unchanged = editor.insight_stats();
        assert_eq!(unchanged.return_lift, dec!(1.2));
        assert_eq!(unchanged.vol_reduction, dec!(0.5));
        assert_eq!(unchanged.sharpe_lift, dec!(0.24));

        editor.set_weight(0, dec!(70)).unwrap();
        editor.set_weight(1, dec!(30)).unwrap();
        let stats = editor.insight_stats();
        assert_eq!(stats.diff_sum, dec!(20));
        assert_eq!(stats.return_lift, dec!(2.2));
        assert_eq!(stats.vol_reduction, dec!(0.9));
        assert_eq!(stats.sharpe_lift, dec!(0.44));
        assert_eq!(
            editor.insight(Locale::En),
            "AI real-time analysis: Expected return +2.2%, Volatility -0.9% vs original."
        );
    }

    #[test]
    fn test_insight_prompts_while_unbalanced() {
        let mut editor = RebalanceEditor::open(&portfolio(&[("A", dec!(60)), ("B", dec!(40))]));
        editor.set_weight(0, dec!(70)).unwrap();
        assert_eq!(editor.insight(Locale::En), "Weights not yet balanced to 100%.");
    }

    #[test]
    fn test_projection_scales_with_total() {
        let mut editor = RebalanceEditor::open(&portfolio(&[("A", dec!(60)), ("B", dec!(40))]));
        let base: Vec<Decimal> = editor.projection_series().iter().map(|p| p.value).collect();
        assert_eq!(base, PROJECTION_BASE.to_vec());

        editor.set_weight(0, dec!(100)).unwrap();
        let scaled = editor.projection_series();
        assert_eq!(editor.total_weight(), dec!(140));
        assert_eq!(scaled[0].value, dec!(10.8));
    }

    #[test]
    fn test_reset_restores_originals() {
        let mut editor = RebalanceEditor::open(&portfolio(&[("A", dec!(60)), ("B", dec!(40))]));
        editor.set_weight(0, dec!(10)).unwrap();
        editor.reset();
        assert!(editor.deltas().iter().all(|d| d.weight_delta.is_zero()));
    }
}
