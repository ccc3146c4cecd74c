use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::advisor::{BacktestReport, CandidateFund, FactorWeights, TargetAllocation};
use crate::customers::RiskPreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStep {
    ViewInput = 1,
    FactorConfig = 2,
    HoldingsDraft = 3,
    BacktestResult = 4,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            WizardStep::ViewInput => "ai_step_1",
            WizardStep::FactorConfig => "ai_step_2",
            WizardStep::HoldingsDraft => "ai_step_3",
            WizardStep::BacktestResult => "ai_step_4",
        }
    }
}

/// Data accumulated so far; each variant carries exactly what its step needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardState {
    ViewInput {
        market_view: String,
    },
    FactorConfig {
        allocation: TargetAllocation,
        factors: FactorWeights,
    },
    HoldingsDraft {
        allocation: TargetAllocation,
        factors: FactorWeights,
        holdings: Vec<CandidateFund>,
    },
    BacktestResult {
        allocation: TargetAllocation,
        factors: FactorWeights,
        holdings: Vec<CandidateFund>,
        report: BacktestReport,
    },
}

impl WizardState {
    pub fn step(&self) -> WizardStep {
        match self {
            WizardState::ViewInput { .. } => WizardStep::ViewInput,
            WizardState::FactorConfig { .. } => WizardStep::FactorConfig,
            WizardState::HoldingsDraft { .. } => WizardStep::HoldingsDraft,
            WizardState::BacktestResult { .. } => WizardStep::BacktestResult,
        }
    }

    pub fn allocation(&self) -> Option<&TargetAllocation> {
        match self {
            WizardState::ViewInput { .. } => None,
            WizardState::FactorConfig { allocation, .. }
            | WizardState::HoldingsDraft { allocation, .. }
            | WizardState::BacktestResult { allocation, .. } => Some(allocation),
        }
    }

    pub fn holdings(&self) -> &[CandidateFund] {
        match self {
            WizardState::HoldingsDraft { holdings, .. }
            | WizardState::BacktestResult { holdings, .. } => holdings,
            _ => &[],
        }
    }

    pub fn report(&self) -> Option<&BacktestReport> {
        match self {
            WizardState::BacktestResult { report, .. } => Some(report),
            _ => None,
        }
    }
}

/// Operator input for the final publish step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishDetails {
    /// Derived from the market view when absent
    pub name: Option<String>,
    /// Derived from the equity share of the allocation when absent
    pub risk: Option<RiskPreference>,
    #[serde(default)]
    pub aum: Decimal,
}
