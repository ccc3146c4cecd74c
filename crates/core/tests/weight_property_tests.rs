//! Property-based tests for the weight invariant and wizard progression.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;
use wealthpulse_core::events::NoOpDomainEventSink;
use wealthpulse_core::portfolios::{FundAllocation, Portfolio};
use wealthpulse_core::customers::RiskPreference;
use wealthpulse_core::rebalance::RebalanceEditor;
use wealthpulse_core::settings::{VerdictPolicy, WorkbenchSettings};
use wealthpulse_core::templates::StrategyTemplateForm;
use wealthpulse_core::i18n::Locale;
use wealthpulse_core::weights::{is_balanced, normalize_to_hundred, total_weight};
use wealthpulse_core::wizard::WizardStep;
use wealthpulse_core::Workbench;

// =============================================================================
// Generators
// =============================================================================

/// Weight with one decimal place, possibly outside 0..=100 to exercise clamping.
fn arb_weight() -> impl Strategy<Value = Decimal> {
    (-200i64..=1200).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn arb_portfolio() -> impl Strategy<Value = Portfolio> {
    (2usize..6).prop_map(|n| {
        let base = Decimal::from(100 / n as i64);
        let mut funds: Vec<FundAllocation> = (0..n)
            .map(|i| FundAllocation::new(format!("Fund {}", i), base))
            .collect();
        let rest = Decimal::from(100) - base * Decimal::from(n as i64);
        funds[0].weight += rest;
        Portfolio {
            id: "PX".to_string(),
            name: "Generated".to_string(),
            risk: RiskPreference::Balanced,
            aum: Decimal::from(10_000_000),
            funds,
            subscribers: vec![],
            deviation: Decimal::ZERO,
            description: None,
        }
    })
}

#[derive(Debug, Clone)]
enum WizardOp {
    Submit,
    Pick,
    Back,
    Backtest,
    Edit(usize, Decimal),
}

fn arb_wizard_op() -> impl Strategy<Value = WizardOp> {
    prop_oneof![
        Just(WizardOp::Submit),
        Just(WizardOp::Pick),
        Just(WizardOp::Back),
        Just(WizardOp::Backtest),
        (0usize..5, arb_weight()).prop_map(|(i, w)| WizardOp::Edit(i, w)),
    ]
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Apply is enabled exactly when the proposed weights sum to 100 (±0.01).
    #[test]
    fn prop_apply_enabled_iff_balanced(
        portfolio in arb_portfolio(),
        edits in prop::collection::vec((0usize..6, arb_weight()), 0..12),
    ) {
        let mut editor = RebalanceEditor::open(&portfolio);
        for (index, weight) in edits {
            let _ = editor.set_weight(index, weight);
        }
        for fund in editor.funds() {
            prop_assert!(fund.proposed_weight >= Decimal::ZERO);
            prop_assert!(fund.proposed_weight <= Decimal::from(100));
        }
        let total = editor.total_weight();
        prop_assert_eq!(editor.can_apply(), is_balanced(total));
    }

    /// Monetary deltas are exact: aum × Δweight / 100.
    #[test]
    fn prop_monetary_delta_is_exact(
        portfolio in arb_portfolio(),
        edits in prop::collection::vec((0usize..6, arb_weight()), 1..8),
    ) {
        let mut editor = RebalanceEditor::open(&portfolio);
        for (index, weight) in edits {
            let _ = editor.set_weight(index, weight);
        }
        for (delta, fund) in editor.deltas().iter().zip(editor.funds()) {
            let expected = portfolio.aum * (fund.proposed_weight - fund.original_weight) / Decimal::from(100);
            prop_assert_eq!(delta.monetary_delta, expected);
        }
    }

    /// Normalised vectors always sum to exactly 100.
    #[test]
    fn prop_normalize_sums_to_hundred(
        weights in prop::collection::vec(arb_weight(), 1..10),
    ) {
        let normalized = normalize_to_hundred(&weights);
        prop_assert_eq!(normalized.len(), weights.len());
        prop_assert_eq!(total_weight(&normalized), Decimal::from(100));
    }

    /// The template form never drops below one asset row.
    #[test]
    fn prop_template_keeps_one_row(
        removals in prop::collection::vec(0u32..8, 0..10),
        additions in 0usize..4,
    ) {
        let mut form = StrategyTemplateForm::new(Locale::En);
        for _ in 0..additions {
            form.add_asset();
        }
        for id in removals {
            form.remove_asset(id);
            prop_assert!(!form.rows().is_empty());
        }
    }

    /// The wizard only moves forward one step at a time, or from step 3 back to 2.
    #[test]
    fn prop_wizard_moves_one_step_at_a_time(
        ops in prop::collection::vec(arb_wizard_op(), 1..16),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let settings = WorkbenchSettings {
            backtest_seed: Some(3),
            verdict_policy: VerdictPolicy::AlwaysPass,
            ..WorkbenchSettings::instant()
        };
        let workbench = Workbench::demo(settings, Arc::new(NoOpDomainEventSink));
        let mut wizard = workbench.new_wizard();
        wizard.set_market_view("Balanced outlook").map_err(|e| TestCaseError::fail(e.to_string()))?;

        for op in ops {
            let before = wizard.step().number();
            let moved = match op {
                WizardOp::Submit => runtime.block_on(wizard.submit_view()).is_ok(),
                WizardOp::Pick => runtime.block_on(wizard.pick_funds()).is_ok(),
                WizardOp::Backtest => runtime.block_on(wizard.run_backtest()).is_ok(),
                WizardOp::Back => wizard.back().is_ok(),
                WizardOp::Edit(i, w) => {
                    let code = wizard.state().holdings().get(i).map(|h| h.code.clone());
                    if let Some(code) = code {
                        let _ = wizard.set_holding_weight(&code, w);
                    }
                    false
                }
            };
            let after = wizard.step().number();
            if moved {
                let forward = after == before + 1;
                let allowed_back = before == 3 && after == 2;
                prop_assert!(forward || allowed_back, "{} -> {}", before, after);
            } else {
                prop_assert_eq!(before, after);
            }
        }
        prop_assert!(wizard.step() <= WizardStep::BacktestResult);
    }
}
