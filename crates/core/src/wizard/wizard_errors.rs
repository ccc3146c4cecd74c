use rust_decimal::Decimal;
use thiserror::Error;

use super::WizardStep;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Market view cannot be empty")]
    EmptyMarketView,

    #[error("Holdings must sum to 100% before backtesting. Current sum: {0:.2}%")]
    UnbalancedWeights(Decimal),

    #[error("Advisor allocation sums to {0:.2}%, expected 100%")]
    AdvisorAllocationUnbalanced(Decimal),

    #[error("Cannot {action} from step {from:?}")]
    InvalidTransition {
        from: WizardStep,
        action: &'static str,
    },

    #[error("Backtest verdict is FAIL; the draft cannot be published")]
    BacktestFailed,

    #[error("No holding with code '{0}' in the draft")]
    UnknownHolding(String),

    #[error("Fund selector returned no candidates")]
    NoCandidates,
}

impl WizardError {
    pub fn invalid(from: WizardStep, action: &'static str) -> Self {
        Self::InvalidTransition { from, action }
    }
}
