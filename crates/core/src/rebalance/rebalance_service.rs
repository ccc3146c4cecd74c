use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::rebalance_editor::RebalanceEditor;
use super::rebalance_errors::RebalanceError;
use super::rebalance_traits::RebalanceServiceTrait;
use crate::constants::DEVIATION_RESIDUAL;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::portfolios::{Portfolio, PortfolioError};
use crate::requests::{RequestError, RequestStatus, RequestType, ReviewRequest};
use crate::settings::WorkbenchSettings;
use crate::state::{AppStore, StateAction};

pub struct RebalanceService {
    store: Arc<AppStore>,
    event_sink: Arc<dyn DomainEventSink>,
    settings: WorkbenchSettings,
}

impl RebalanceService {
    pub fn new(
        store: Arc<AppStore>,
        event_sink: Arc<dyn DomainEventSink>,
        settings: WorkbenchSettings,
    ) -> Self {
        Self {
            store,
            event_sink,
            settings,
        }
    }

    /// Loads an open rebalancing request and the portfolio it names.
    fn load_rebalancing(&self, request_id: &str) -> Result<(ReviewRequest, Portfolio)> {
        let request = self
            .store
            .read(|state| state.request(request_id).cloned())?
            .ok_or_else(|| RequestError::NotFound(request_id.to_string()))?;
        if request.is_terminal() {
            return Err(RequestError::already_resolved(request_id, request.status).into());
        }
        if !request.status.is_active() {
            return Err(RequestError::NotActive {
                id: request_id.to_string(),
                status: request.status,
            }
            .into());
        }
        if request.request_type != RequestType::Rebalancing {
            return Err(RebalanceError::NotRebalancing(request_id.to_string()).into());
        }
        let name = request
            .portfolio_name
            .clone()
            .ok_or_else(|| RebalanceError::MissingPortfolio(request_id.to_string()))?;
        let portfolio = self
            .store
            .read(|state| state.portfolio_by_name(&name).cloned())?
            .ok_or(PortfolioError::NameNotFound(name))?;
        Ok((request, portfolio))
    }

    /// Runs `actions` as one batch after the rebalance delay, then emits
    /// the rebalance events for `portfolio_id`.
    ///
    /// Commit and events both happen on a spawned task, so dropping the
    /// caller's future once the timer has started cancels neither.
    async fn commit_after_delay(
        &self,
        actions: Vec<StateAction>,
        portfolio_id: &str,
        request_id: Option<&str>,
    ) -> Result<()> {
        let store = Arc::clone(&self.store);
        let sink = Arc::clone(&self.event_sink);
        let delay = self.settings.rebalance_delay();
        let events = Self::committed_events(portfolio_id, request_id);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            store.dispatch_all(actions)?;
            sink.emit_batch(events);
            Ok::<_, crate::Error>(())
        });
        handle.await?
    }

    fn committed_events(portfolio_id: &str, request_id: Option<&str>) -> Vec<DomainEvent> {
        let mut events = vec![DomainEvent::portfolio_rebalanced(
            portfolio_id,
            request_id.map(str::to_string),
        )];
        if let Some(request_id) = request_id {
            events.push(DomainEvent::request_resolved(
                request_id,
                RequestStatus::Success,
            ));
        }
        events
    }

    fn resolve_action(request_id: Option<&str>) -> Option<StateAction> {
        request_id.map(|id| StateAction::RequestStatusChanged {
            request_id: id.to_string(),
            status: RequestStatus::Success,
        })
    }

    fn reload(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.store
            .read(|state| state.portfolio(portfolio_id).cloned())?
            .ok_or_else(|| PortfolioError::NotFound(portfolio_id.to_string()).into())
    }
}

#[async_trait]
impl RebalanceServiceTrait for RebalanceService {
    fn open_for_portfolio(&self, portfolio_id: &str) -> Result<RebalanceEditor> {
        let portfolio = self.reload(portfolio_id)?;
        Ok(RebalanceEditor::open(&portfolio))
    }

    fn open_for_request(&self, request_id: &str) -> Result<RebalanceEditor> {
        let (_, portfolio) = self.load_rebalancing(request_id)?;
        debug!(
            "Opening rebalance editor for {} on request {}",
            portfolio.id, request_id
        );
        Ok(RebalanceEditor::for_request(&portfolio, request_id))
    }

    async fn apply(&self, editor: RebalanceEditor) -> Result<Portfolio> {
        if !editor.can_apply() {
            return Err(RebalanceError::Unbalanced(editor.total_weight()).into());
        }
        let portfolio_id = editor.portfolio_id().to_string();
        let request_id = editor.request_id().map(str::to_string);

        let mut actions = vec![StateAction::PortfolioFundsReplaced {
            portfolio_id: portfolio_id.clone(),
            funds: editor.proposed_funds(),
            deviation: DEVIATION_RESIDUAL,
        }];
        actions.extend(Self::resolve_action(request_id.as_deref()));

        self.commit_after_delay(actions, &portfolio_id, request_id.as_deref())
            .await?;
        info!(
            "Rebalance applied to {} ({} funds)",
            portfolio_id,
            editor.funds().len()
        );
        self.reload(&portfolio_id)
    }

    async fn auto_rebalance(&self, request_id: &str) -> Result<Portfolio> {
        let (_, portfolio) = self.load_rebalancing(request_id)?;
        let mut actions = vec![StateAction::PortfolioDeviationReset {
            portfolio_id: portfolio.id.clone(),
            deviation: DEVIATION_RESIDUAL,
        }];
        actions.extend(Self::resolve_action(Some(request_id)));

        self.commit_after_delay(actions, &portfolio.id, Some(request_id))
            .await?;
        info!(
            "Auto rebalance of {} accepted via {}",
            portfolio.id, request_id
        );
        self.reload(&portfolio.id)
    }
}
