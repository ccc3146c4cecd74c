use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use super::portfolios_errors::PortfolioError;
use super::portfolios_model::{NewPortfolio, Portfolio, Subscriber};
use super::portfolios_traits::PortfolioServiceTrait;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::state::{AppStore, StateAction};

/// Service over the portfolio collection held in the [`AppStore`].
pub struct PortfolioService {
    store: Arc<AppStore>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl PortfolioService {
    pub fn new(store: Arc<AppStore>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self { store, event_sink }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    fn list_portfolios(&self) -> Result<Vec<Portfolio>> {
        self.store.read(|state| state.portfolios.clone())
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.store
            .read(|state| state.portfolio(portfolio_id).cloned())?
            .ok_or_else(|| PortfolioError::NotFound(portfolio_id.to_string()).into())
    }

    /// Agreements and requests refer to portfolios by name only.
    fn find_by_name(&self, name: &str) -> Result<Portfolio> {
        self.store
            .read(|state| state.portfolio_by_name(name).cloned())?
            .ok_or_else(|| PortfolioError::NameNotFound(name.to_string()).into())
    }

    /// Validates and appends a portfolio to the gallery.
    async fn create_portfolio(&self, new_portfolio: NewPortfolio) -> Result<Portfolio> {
        new_portfolio.validate()?;
        let portfolio = Portfolio {
            id: new_portfolio
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_portfolio.name.trim().to_string(),
            risk: new_portfolio.risk,
            aum: new_portfolio.aum,
            funds: new_portfolio.funds,
            subscribers: Vec::new(),
            deviation: rust_decimal::Decimal::ZERO,
            description: new_portfolio.description,
        };
        debug!(
            "Publishing portfolio {} with {} funds",
            portfolio.id,
            portfolio.funds.len()
        );

        self.store
            .dispatch(StateAction::PortfolioAppended(portfolio.clone()))?;
        info!("Portfolio '{}' published as {}", portfolio.name, portfolio.id);
        self.event_sink.emit(DomainEvent::portfolio_published(
            portfolio.id.clone(),
            portfolio.name.clone(),
        ));
        Ok(portfolio)
    }

    fn subscribers(&self, portfolio_id: &str) -> Result<Vec<Subscriber>> {
        Ok(self.get_portfolio(portfolio_id)?.subscribers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::RiskPreference;
    use crate::events::MockDomainEventSink;
    use crate::fixtures::DemoSeed;
    use crate::portfolios::FundAllocation;
    use crate::settings::WorkbenchSettings;
    use crate::state::WorkbenchState;
    use rust_decimal_macros::dec;

    fn setup() -> (PortfolioService, Arc<AppStore>, MockDomainEventSink) {
        let state = WorkbenchState::from_seed(&DemoSeed, &WorkbenchSettings::instant());
        let store = Arc::new(AppStore::new(state));
        let sink = MockDomainEventSink::new();
        let service = PortfolioService::new(store.clone(), Arc::new(sink.clone()));
        (service, store, sink)
    }

    fn new_portfolio(weights: &[i64]) -> NewPortfolio {
        NewPortfolio {
            id: None,
            name: " Income Plus ".to_string(),
            risk: RiskPreference::Balanced,
            aum: dec!(0),
            funds: weights
                .iter()
                .enumerate()
                .map(|(i, w)| FundAllocation::new(format!("Fund {}", i), rust_decimal::Decimal::from(*w)))
                .collect(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_portfolio_appends_and_emits() {
        let (service, store, sink) = setup();
        let before = store.read(|s| s.portfolios.len()).unwrap();

        let created = service.create_portfolio(new_portfolio(&[70, 30])).await.unwrap();

        assert_eq!(created.name, "Income Plus");
        assert_eq!(store.read(|s| s.portfolios.len()).unwrap(), before + 1);
        assert_eq!(
            sink.events(),
            vec![DomainEvent::portfolio_published(created.id.clone(), "Income Plus")]
        );
        assert_eq!(service.find_by_name("Income Plus").unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_create_portfolio_rejects_unbalanced() {
        let (service, store, sink) = setup();
        let before = store.snapshot().unwrap();

        assert!(service.create_portfolio(new_portfolio(&[70, 40])).await.is_err());

        assert_eq!(store.snapshot().unwrap(), before);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_lookup_errors() {
        let (service, _, _) = setup();
        assert!(matches!(
            service.get_portfolio("P99"),
            Err(crate::Error::Portfolio(PortfolioError::NotFound(_)))
        ));
        assert!(service.find_by_name("Unknown").is_err());
        assert_eq!(service.subscribers("P01").unwrap().len(), 2);
    }
}
