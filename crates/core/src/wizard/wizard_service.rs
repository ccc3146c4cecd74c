use log::{debug, info, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::wizard_errors::WizardError;
use super::wizard_model::{PublishDetails, WizardState, WizardStep};
use crate::advisor::{
    AllocationAdvisor, BacktestEngine, BacktestVerdict, CandidateFund, Factor, FactorWeights,
    FundSelector, TargetAllocation,
};
use crate::customers::RiskPreference;
use crate::errors::{Error, Result};
use crate::i18n::{translate, Locale};
use crate::portfolios::{FundAllocation, NewPortfolio, Portfolio, PortfolioServiceTrait};
use crate::settings::{VerdictPolicy, WorkbenchSettings};
use crate::weights::{clamp_weight, is_balanced, normalize_to_hundred, parse_weight_input, total_weight};

const DEFAULT_NAME_CHARS: usize = 24;

fn default_name(view: &str) -> String {
    let snippet: String = view.chars().take(DEFAULT_NAME_CHARS).collect();
    format!("AI Strategy - {}", snippet.trim())
}

/// Risk label implied by the equity share of an allocation.
fn risk_from_allocation(allocation: &TargetAllocation) -> RiskPreference {
    let equity = allocation
        .classes
        .iter()
        .filter(|c| c.asset_class.eq_ignore_ascii_case("equity"))
        .map(|c| c.weight)
        .sum::<Decimal>();
    if equity >= dec!(55) {
        RiskPreference::Aggressive
    } else if equity <= dec!(30) {
        RiskPreference::Conservative
    } else {
        RiskPreference::Balanced
    }
}

/// One open construction wizard.
///
/// The wizard holds only local draft state. Dropping it, or calling
/// [`cancel`](Self::cancel), discards the draft without touching the store.
pub struct PortfolioWizard {
    state: WizardState,
    advisor: Arc<dyn AllocationAdvisor>,
    selector: Arc<dyn FundSelector>,
    engine: Arc<dyn BacktestEngine>,
    portfolios: Arc<dyn PortfolioServiceTrait>,
    settings: WorkbenchSettings,
}

impl PortfolioWizard {
    pub fn new(
        advisor: Arc<dyn AllocationAdvisor>,
        selector: Arc<dyn FundSelector>,
        engine: Arc<dyn BacktestEngine>,
        portfolios: Arc<dyn PortfolioServiceTrait>,
        settings: WorkbenchSettings,
    ) -> Self {
        Self {
            state: WizardState::ViewInput {
                market_view: String::new(),
            },
            advisor,
            selector,
            engine,
            portfolios,
            settings,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    fn invalid(&self, action: &'static str) -> Error {
        warn!("Wizard rejected '{}' at step {:?}", action, self.step());
        WizardError::invalid(self.step(), action).into()
    }

    fn holdings_mut(&mut self, action: &'static str) -> Result<&mut Vec<CandidateFund>> {
        if self.step() != WizardStep::HoldingsDraft {
            return Err(self.invalid(action));
        }
        match &mut self.state {
            WizardState::HoldingsDraft { holdings, .. } => Ok(holdings),
            _ => Err(WizardError::invalid(WizardStep::HoldingsDraft, action).into()),
        }
    }

    // --- Step 1: market view ---

    pub fn set_market_view(&mut self, text: impl Into<String>) -> Result<()> {
        if let WizardState::ViewInput { market_view } = &mut self.state {
            *market_view = text.into();
            return Ok(());
        }
        Err(self.invalid("edit the market view"))
    }

    /// Asks the advisor for a target allocation and moves to step 2.
    pub async fn submit_view(&mut self) -> Result<&TargetAllocation> {
        let view = match &self.state {
            WizardState::ViewInput { market_view } => market_view.trim().to_string(),
            _ => return Err(self.invalid("submit the market view")),
        };
        if view.is_empty() {
            warn!("Wizard blocked: empty market view");
            return Err(WizardError::EmptyMarketView.into());
        }

        let allocation = self.advisor.propose_allocation(&view).await?;
        if !allocation.is_balanced() {
            return Err(WizardError::AdvisorAllocationUnbalanced(allocation.total_weight()).into());
        }
        debug!("Wizard advanced to factor configuration");
        self.state = WizardState::FactorConfig {
            allocation,
            factors: FactorWeights::default(),
        };
        self.state
            .allocation()
            .ok_or_else(|| Error::Unexpected("allocation missing after submit".to_string()))
    }

    // --- Step 2: factor configuration ---

    /// Moves one factor slider; values above 100 are clamped.
    pub fn set_factor(&mut self, factor: Factor, value: u8) -> Result<()> {
        if let WizardState::FactorConfig { factors, .. } = &mut self.state {
            factors.set(factor, value);
            return Ok(());
        }
        Err(self.invalid("adjust factors"))
    }

    /// Runs fund selection and moves to step 3.
    ///
    /// Selector weights that do not add up to 100 are re-normalised.
    pub async fn pick_funds(&mut self) -> Result<&[CandidateFund]> {
        let (allocation, factors) = match &self.state {
            WizardState::FactorConfig {
                allocation,
                factors,
            } => (allocation.clone(), *factors),
            _ => return Err(self.invalid("pick funds")),
        };

        let mut funds = self.selector.select_funds(&allocation, &factors).await?;
        if funds.is_empty() {
            return Err(WizardError::NoCandidates.into());
        }
        let weights: Vec<Decimal> = funds.iter().map(|f| f.weight).collect();
        if !is_balanced(total_weight(&weights)) {
            debug!("Re-normalising selector weights {:?}", weights);
            for (fund, weight) in funds.iter_mut().zip(normalize_to_hundred(&weights)) {
                fund.weight = weight;
            }
        }

        self.state = WizardState::HoldingsDraft {
            allocation,
            factors,
            holdings: funds,
        };
        Ok(self.state.holdings())
    }

    // --- Step 3: holdings draft ---

    /// Sets one holding's weight, clamped to 0..=100.
    pub fn set_holding_weight(&mut self, code: &str, weight: Decimal) -> Result<()> {
        let holdings = self.holdings_mut("edit holdings")?;
        let holding = holdings
            .iter_mut()
            .find(|h| h.code == code)
            .ok_or_else(|| WizardError::UnknownHolding(code.to_string()))?;
        holding.weight = clamp_weight(weight);
        Ok(())
    }

    /// Same as [`set_holding_weight`](Self::set_holding_weight) for raw field input.
    pub fn set_holding_weight_input(&mut self, code: &str, raw: &str) -> Result<()> {
        self.set_holding_weight(code, parse_weight_input(raw))
    }

    /// Drops a row from the draft. Remaining weights are left as they are.
    pub fn remove_holding(&mut self, code: &str) -> Result<CandidateFund> {
        let holdings = self.holdings_mut("remove holdings")?;
        let idx = holdings
            .iter()
            .position(|h| h.code == code)
            .ok_or_else(|| WizardError::UnknownHolding(code.to_string()))?;
        Ok(holdings.remove(idx))
    }

    pub fn total_weight(&self) -> Decimal {
        total_weight(self.state.holdings().iter().map(|h| &h.weight))
    }

    pub fn can_run_backtest(&self) -> bool {
        self.step() == WizardStep::HoldingsDraft
            && !self.state.holdings().is_empty()
            && is_balanced(self.total_weight())
    }

    /// Returns from the holdings draft to the factor configuration.
    ///
    /// This is the only backward transition; the draft holdings are discarded.
    pub fn back(&mut self) -> Result<()> {
        let previous = match &self.state {
            WizardState::HoldingsDraft {
                allocation,
                factors,
                ..
            } => WizardState::FactorConfig {
                allocation: allocation.clone(),
                factors: *factors,
            },
            _ => return Err(self.invalid("go back")),
        };
        self.state = previous;
        Ok(())
    }

    /// Backtests the draft and moves to step 4.
    pub async fn run_backtest(&mut self) -> Result<BacktestVerdict> {
        let (allocation, factors, holdings) = match &self.state {
            WizardState::HoldingsDraft {
                allocation,
                factors,
                holdings,
            } => (allocation.clone(), *factors, holdings.clone()),
            _ => return Err(self.invalid("run the backtest")),
        };
        let total = total_weight(holdings.iter().map(|h| &h.weight));
        if holdings.is_empty() || !is_balanced(total) {
            warn!("Wizard blocked: holdings sum to {}", total);
            return Err(WizardError::UnbalancedWeights(total).into());
        }

        tokio::time::sleep(self.settings.backtest_delay()).await;
        let allocations: Vec<FundAllocation> = holdings
            .iter()
            .map(|h| FundAllocation::new(h.name.clone(), h.weight))
            .collect();
        let mut report = self.engine.run(&allocations).await?;
        if self.settings.verdict_policy == VerdictPolicy::AlwaysPass {
            report.verdict = BacktestVerdict::Pass;
        }
        let verdict = report.verdict;
        info!("Backtest finished with verdict {:?}", verdict);

        self.state = WizardState::BacktestResult {
            allocation,
            factors,
            holdings,
            report,
        };
        Ok(verdict)
    }

    // --- Step 4: backtest result ---

    /// Narrative line shown under the verdict.
    pub fn narrative(&self, locale: Locale) -> Option<&'static str> {
        self.state.report().map(|report| {
            let key = if report.verdict.is_pass() {
                "ai_publish_ready"
            } else {
                "ai_publish_blocked"
            };
            translate(locale, key)
        })
    }

    pub fn can_publish(&self) -> bool {
        self.state.report().is_some_and(|r| r.verdict.is_pass())
    }

    /// Appends the draft to the gallery and closes the wizard.
    pub async fn publish(self, details: PublishDetails) -> Result<Portfolio> {
        let step = self.step();
        let WizardState::BacktestResult {
            allocation,
            holdings,
            report,
            ..
        } = self.state
        else {
            warn!("Wizard rejected 'publish' at step {:?}", step);
            return Err(WizardError::invalid(step, "publish").into());
        };
        if !report.verdict.is_pass() {
            warn!("Wizard blocked: backtest verdict is FAIL");
            return Err(WizardError::BacktestFailed.into());
        }

        let name = details
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| default_name(&allocation.view));
        let new_portfolio = NewPortfolio {
            id: None,
            name,
            risk: details
                .risk
                .unwrap_or_else(|| risk_from_allocation(&allocation)),
            aum: details.aum,
            funds: holdings
                .into_iter()
                .map(|h| FundAllocation::new(h.name, h.weight))
                .collect(),
            description: Some(allocation.view),
        };
        self.portfolios.create_portfolio(new_portfolio).await
    }

    /// Discards the draft.
    pub fn cancel(self) {
        debug!("Wizard cancelled at step {:?}", self.step());
    }
}
