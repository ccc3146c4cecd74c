//! Composition root: one shared store and the services that operate on it.

use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::advisor::{
    AllocationAdvisor, BacktestEngine, FactorFundSelector, FundSelector,
    KeywordAllocationAdvisor, SimulatedBacktestEngine,
};
use crate::customers::{CustomerService, CustomerServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::fees::FeeService;
use crate::fixtures::{DemoSeed, SeedSource};
use crate::i18n::Locale;
use crate::portfolios::{Portfolio, PortfolioService, PortfolioServiceTrait};
use crate::rebalance::{RebalanceService, RebalanceServiceTrait};
use crate::requests::{RequestService, RequestServiceTrait};
use crate::settings::WorkbenchSettings;
use crate::state::{AppStore, StateAction, WorkbenchState};
use crate::summary::WorkbenchSummary;
use crate::templates::StrategyTemplateForm;
use crate::termination::{TerminationService, TerminationServiceTrait};
use crate::wizard::PortfolioWizard;

/// Everything a front end needs, wired against one [`AppStore`].
pub struct Workbench {
    pub store: Arc<AppStore>,
    pub event_sink: Arc<dyn DomainEventSink>,
    pub settings: WorkbenchSettings,
    pub customer_service: Arc<dyn CustomerServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub request_service: Arc<dyn RequestServiceTrait>,
    pub rebalance_service: Arc<dyn RebalanceServiceTrait>,
    pub termination_service: Arc<dyn TerminationServiceTrait>,
    pub fee_service: Arc<FeeService>,
    advisor: Arc<dyn AllocationAdvisor>,
    selector: Arc<dyn FundSelector>,
    engine: Arc<dyn BacktestEngine>,
}

impl Workbench {
    pub fn new(
        seed: &dyn SeedSource,
        settings: WorkbenchSettings,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        let store = Arc::new(AppStore::new(WorkbenchState::from_seed(seed, &settings)));
        info!(
            "Workbench ready: locale {}, balance {}",
            settings.locale.as_str(),
            settings.opening_balance
        );
        Self {
            customer_service: Arc::new(CustomerService::new(store.clone())),
            portfolio_service: Arc::new(PortfolioService::new(store.clone(), event_sink.clone())),
            request_service: Arc::new(RequestService::new(store.clone(), event_sink.clone())),
            rebalance_service: Arc::new(RebalanceService::new(
                store.clone(),
                event_sink.clone(),
                settings.clone(),
            )),
            termination_service: Arc::new(TerminationService::new(
                store.clone(),
                event_sink.clone(),
                settings.clone(),
            )),
            fee_service: Arc::new(FeeService::new(store.clone())),
            advisor: Arc::new(KeywordAllocationAdvisor::new()),
            selector: Arc::new(FactorFundSelector::new()),
            engine: Arc::new(SimulatedBacktestEngine::new(settings.backtest_seed)),
            store,
            event_sink,
            settings,
        }
    }

    /// Workbench over the built-in demo data.
    pub fn demo(settings: WorkbenchSettings, event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self::new(&DemoSeed, settings, event_sink)
    }

    /// Swaps the wizard capabilities, e.g. for a real model or a test stub.
    pub fn with_capabilities(
        mut self,
        advisor: Arc<dyn AllocationAdvisor>,
        selector: Arc<dyn FundSelector>,
        engine: Arc<dyn BacktestEngine>,
    ) -> Self {
        self.advisor = advisor;
        self.selector = selector;
        self.engine = engine;
        self
    }

    pub fn new_wizard(&self) -> PortfolioWizard {
        PortfolioWizard::new(
            self.advisor.clone(),
            self.selector.clone(),
            self.engine.clone(),
            self.portfolio_service.clone(),
            self.settings.clone(),
        )
    }

    pub fn new_template_form(&self) -> Result<StrategyTemplateForm> {
        Ok(StrategyTemplateForm::new(self.locale()?))
    }

    pub async fn publish_template(
        &self,
        form: StrategyTemplateForm,
        aum: Decimal,
    ) -> Result<Portfolio> {
        let new_portfolio = form.into_new_portfolio(aum)?;
        self.portfolio_service.create_portfolio(new_portfolio).await
    }

    pub fn locale(&self) -> Result<Locale> {
        self.store.read(|state| state.locale)
    }

    pub fn switch_locale(&self, locale: Locale) -> Result<()> {
        self.store.dispatch(StateAction::LocaleSwitched(locale))?;
        self.event_sink.emit(DomainEvent::locale_switched(locale));
        Ok(())
    }

    /// Flips between the two locales and returns the new one.
    pub fn toggle_locale(&self) -> Result<Locale> {
        let next = self.locale()?.toggle();
        self.switch_locale(next)?;
        Ok(next)
    }

    pub fn summary(&self) -> Result<WorkbenchSummary> {
        self.store.read(WorkbenchSummary::from_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MockDomainEventSink;
    use rust_decimal_macros::dec;

    #[test]
    fn test_toggle_locale_emits_event() {
        let sink = Arc::new(MockDomainEventSink::new());
        let workbench = Workbench::demo(WorkbenchSettings::instant(), sink.clone());
        let start = workbench.locale().unwrap();
        let next = workbench.toggle_locale().unwrap();
        assert_ne!(start, next);
        assert_eq!(workbench.locale().unwrap(), next);
        assert_eq!(sink.events(), vec![DomainEvent::locale_switched(next)]);
    }

    #[tokio::test]
    async fn test_publish_template_adds_portfolio() {
        let sink = Arc::new(MockDomainEventSink::new());
        let workbench = Workbench::demo(WorkbenchSettings::instant(), sink);
        let mut form = workbench.new_template_form().unwrap();
        form.name = "Core Income".to_string();
        let portfolio = workbench.publish_template(form, dec!(500000)).await.unwrap();
        assert_eq!(portfolio.funds.len(), 2);
        assert_eq!(workbench.summary().unwrap().portfolio_count, 5);
    }
}
