use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

use super::requests_errors::RequestError;
use super::requests_model::{
    NewReviewRequest, QueueCounts, QueueView, RequestStatus, RequestType, ReviewAction,
    ReviewDecision, ReviewRequest,
};
use super::requests_traits::RequestServiceTrait;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::i18n::{translate, Locale};
use crate::state::{AppStore, StateAction};

/// Fallback rationale shown when a request carries no description.
fn fallback_rationale_key(request_type: RequestType) -> &'static str {
    match request_type {
        RequestType::TransferIn => "reason_transfer_in",
        RequestType::TransferOut => "msg_transfer_out_notice",
        RequestType::Rebalancing => "reason_defensive_rotation",
        RequestType::Termination => "reason_termination",
        RequestType::KycExpired => "reason_kyc_expired",
        RequestType::DriftAlert => "reason_drift_alert",
    }
}

pub struct RequestService {
    store: Arc<AppStore>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl RequestService {
    pub fn new(store: Arc<AppStore>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self { store, event_sink }
    }

    fn set_status(&self, request_id: &str, status: RequestStatus) -> Result<ReviewRequest> {
        self.store.dispatch(StateAction::RequestStatusChanged {
            request_id: request_id.to_string(),
            status,
        })?;
        self.get_request(request_id)
    }
}

#[async_trait]
impl RequestServiceTrait for RequestService {
    /// SUBMITTED requests belong to neither view until intake advances them.
    fn list_requests(&self, view: QueueView) -> Result<Vec<ReviewRequest>> {
        self.store.read(|state| {
            state
                .requests
                .iter()
                .filter(|r| view.contains(r))
                .cloned()
                .collect()
        })
    }

    fn get_request(&self, request_id: &str) -> Result<ReviewRequest> {
        self.store
            .read(|state| state.request(request_id).cloned())?
            .ok_or_else(|| RequestError::NotFound(request_id.to_string()).into())
    }

    fn counts(&self) -> Result<QueueCounts> {
        self.store.read(|state| {
            state
                .requests
                .iter()
                .fold(QueueCounts::default(), |mut counts, r| {
                    if r.status.is_active() {
                        counts.active += 1;
                    } else if r.status.is_terminal() {
                        counts.history += 1;
                    } else {
                        counts.intake += 1;
                    }
                    counts
                })
        })
    }

    fn available_action(&self, request_id: &str) -> Result<ReviewAction> {
        let request = self.get_request(request_id)?;
        let action = if request.is_terminal() {
            ReviewAction::Archived
        } else if !request.status.is_active() {
            ReviewAction::AwaitingIntake
        } else if request.request_type == RequestType::Rebalancing {
            ReviewAction::GoToReview {
                portfolio_name: request.portfolio_name,
            }
        } else {
            ReviewAction::Decide
        };
        Ok(action)
    }

    async fn submit_request(&self, new_request: NewReviewRequest) -> Result<ReviewRequest> {
        new_request.validate()?;
        let id = self
            .store
            .next_request_id(new_request.request_type, new_request.date)?;
        let request = new_request.into_request(id);
        self.store
            .dispatch(StateAction::RequestAppended(request.clone()))?;
        info!(
            "Request {} ({:?}) entered the queue as {:?}",
            request.id, request.request_type, request.status
        );
        self.event_sink
            .emit(DomainEvent::request_submitted(request.id.clone()));
        Ok(request)
    }

    /// Moves a request one step through intake: SUBMITTED, VALIDATING, AUDITING.
    async fn advance_request(&self, request_id: &str) -> Result<ReviewRequest> {
        let request = self.get_request(request_id)?;
        if request.is_terminal() {
            return Err(RequestError::already_resolved(request.id, request.status).into());
        }
        let next = request
            .status
            .next_intake_stage()
            .ok_or_else(|| RequestError::IntakeComplete {
                id: request.id.clone(),
                status: request.status,
            })?;
        debug!("Advancing request {} {:?} -> {:?}", request.id, request.status, next);
        self.set_status(request_id, next)
    }

    async fn decide(&self, request_id: &str, decision: ReviewDecision) -> Result<ReviewRequest> {
        let request = self.get_request(request_id)?;
        if request.is_terminal() {
            warn!("Ignoring {:?} on archived request {}", decision, request.id);
            return Err(RequestError::already_resolved(request.id, request.status).into());
        }
        if request.request_type == RequestType::Rebalancing {
            return Err(RequestError::RequiresEditorReview(request.id).into());
        }
        if !request.status.is_active() {
            return Err(RequestError::NotActive {
                id: request.id,
                status: request.status,
            }
            .into());
        }

        let outcome = decision.outcome();
        let resolved = self.set_status(request_id, outcome)?;
        info!("Request {} resolved as {:?}", resolved.id, outcome);
        self.event_sink
            .emit(DomainEvent::request_resolved(resolved.id.clone(), outcome));
        Ok(resolved)
    }

    fn rationale(&self, request: &ReviewRequest, locale: Locale) -> String {
        match request.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => translate(locale, fallback_rationale_key(request.request_type)).to_string(),
        }
    }
}
