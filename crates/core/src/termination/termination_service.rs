use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use std::sync::Arc;

use super::termination_errors::TerminationError;
use super::termination_model::{TerminationQuote, TerminationReceipt};
use super::termination_traits::TerminationServiceTrait;
use crate::agreements::{Agreement, AgreementStatus};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::requests::{RequestStatus, RequestType, ReviewRequest};
use crate::settings::{SettlementMode, WorkbenchSettings};
use crate::state::{AppStore, StateAction};

pub struct TerminationService {
    store: Arc<AppStore>,
    event_sink: Arc<dyn DomainEventSink>,
    settings: WorkbenchSettings,
}

impl TerminationService {
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

    fn signed_agreement(&self, agreement_id: &str) -> Result<Agreement> {
        let agreement = self
            .store
            .read(|state| state.agreement(agreement_id).cloned())?
            .ok_or_else(|| TerminationError::AgreementNotFound(agreement_id.to_string()))?;
        if agreement.status != AgreementStatus::Signed {
            return Err(TerminationError::not_signed(agreement_id, agreement.status).into());
        }
        Ok(agreement)
    }

    /// Settlement batch for `quote`, minted against the current sequence.
    fn settlement_actions(
        store: &AppStore,
        quote: &TerminationQuote,
        mode: SettlementMode,
        today: NaiveDate,
    ) -> Result<(String, Vec<StateAction>)> {
        let request_id = store.next_request_id(RequestType::Termination, today)?;
        let customer_name = store.read(|state| {
            state
                .customers
                .iter()
                .find(|c| c.id == quote.customer_id)
                .map(|c| c.display_name(state.locale).to_string())
        })?;
        let audit = ReviewRequest {
            id: request_id.clone(),
            request_type: RequestType::Termination,
            status: RequestStatus::Success,
            customer_id: Some(quote.customer_id.clone()),
            customer_name,
            amount: quote.amount,
            date: today,
            portfolio_name: Some(quote.strategy_name.clone()),
            description: None,
            suitability_passed: true,
        };

        let mut actions = vec![
            StateAction::BalanceDebited(quote.fee),
            StateAction::AgreementRemoved {
                agreement_id: quote.agreement_id.clone(),
            },
            StateAction::RequestAppended(audit),
        ];
        if mode == SettlementMode::CreditNet {
            actions.push(StateAction::BalanceCredited(quote.net));
        }
        Ok((request_id, actions))
    }
}

#[async_trait]
impl TerminationServiceTrait for TerminationService {
    fn initiate(&self, agreement_id: &str) -> Result<TerminationQuote> {
        let agreement = self.signed_agreement(agreement_id)?;
        let quote = TerminationQuote::for_agreement(&agreement);
        debug!(
            "Termination quote for {}: fee {} net {}",
            agreement_id, quote.fee, quote.net
        );
        Ok(quote)
    }

    async fn confirm(&self, quote: TerminationQuote) -> Result<TerminationReceipt> {
        // Re-check: the agreement may have gone away since the quote.
        let agreement = self.signed_agreement(&quote.agreement_id)?;
        let quote = TerminationQuote::for_agreement(&agreement);

        let store = Arc::clone(&self.store);
        let sink = Arc::clone(&self.event_sink);
        let delay = self.settings.settlement_delay();
        let mode = self.settings.settlement_mode;
        let pending = quote.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let (request_id, actions) =
                Self::settlement_actions(&store, &pending, mode, Utc::now().date_naive())?;
            store.dispatch_all(actions)?;
            sink.emit_batch(vec![
                DomainEvent::agreement_terminated(
                    pending.agreement_id.clone(),
                    pending.fee,
                    pending.net,
                ),
                DomainEvent::request_submitted(request_id.clone()),
            ]);
            let balance_after = store.read(|state| state.balance)?;
            Ok::<_, crate::Error>((request_id, balance_after))
        });
        let (request_id, balance_after) = handle.await??;

        info!(
            "Agreement {} terminated, fee {} debited, audit record {}",
            quote.agreement_id, quote.fee, request_id
        );
        Ok(TerminationReceipt {
            agreement_id: quote.agreement_id,
            fee: quote.fee,
            net: quote.net,
            request_id,
            balance_after,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MockDomainEventSink;
    use crate::fixtures::DemoSeed;
    use crate::state::WorkbenchState;
    use crate::i18n::Locale;
    use rust_decimal_macros::dec;
    use std::time::Duration;

    fn service(settings: WorkbenchSettings) -> (Arc<AppStore>, Arc<MockDomainEventSink>, TerminationService) {
        let store = Arc::new(AppStore::new(WorkbenchState::from_seed(&DemoSeed, &settings)));
        let sink = Arc::new(MockDomainEventSink::new());
        let svc = TerminationService::new(store.clone(), sink.clone(), settings);
        (store, sink, svc)
    }

    #[test]
    fn test_initiate_does_not_mutate() {
        let (store, sink, svc) = service(WorkbenchSettings::instant());
        let before = store.snapshot().unwrap();
        let quote = svc.initiate("WA-0856").unwrap();
        assert_eq!(quote.fee, dec!(1250));
        assert_eq!(quote.net, dec!(1248750));
        assert_eq!(store.snapshot().unwrap(), before);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_initiate_requires_signed_agreement() {
        let (_, _, svc) = service(WorkbenchSettings::instant());
        let err = svc.initiate("WA-0858").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Termination(TerminationError::NotSigned { .. })
        ));
        assert!(svc.initiate("WA-9999").is_err());
    }

    #[tokio::test]
    async fn test_confirm_debits_fee_only_by_default() {
        let (store, sink, svc) = service(WorkbenchSettings::instant());
        let opening = store.read(|s| s.balance).unwrap();
        let quote = svc.initiate("WA-0856").unwrap();
        let receipt = svc.confirm(quote).await.unwrap();

        assert_eq!(receipt.balance_after, opening - dec!(1250));
        assert!(receipt.request_id.starts_with("TM-"));
        let state = store.snapshot().unwrap();
        assert!(state.agreement("WA-0856").is_none());
        let audit = state.request(&receipt.request_id).unwrap();
        assert_eq!(audit.request_type, RequestType::Termination);
        assert_eq!(audit.status, RequestStatus::Success);
        assert_eq!(sink.len(), 2);
    }

    #[tokio::test]
    async fn test_credit_net_mode_returns_principal() {
        let settings = WorkbenchSettings {
            settlement_mode: SettlementMode::CreditNet,
            ..WorkbenchSettings::instant()
        };
        let (store, _, svc) = service(settings);
        let opening = store.read(|s| s.balance).unwrap();
        let quote = svc.initiate("WA-0857").unwrap();
        let receipt = svc.confirm(quote).await.unwrap();
        assert_eq!(receipt.balance_after, opening - dec!(4500) + dec!(4495500));
    }

    #[tokio::test]
    async fn test_second_confirm_fails_without_side_effects() {
        let (store, _, svc) = service(WorkbenchSettings::instant());
        let quote = svc.initiate("WA-0859").unwrap();
        svc.confirm(quote.clone()).await.unwrap();
        let after_first = store.snapshot().unwrap();

        assert!(svc.confirm(quote).await.is_err());
        assert_eq!(store.snapshot().unwrap(), after_first);
    }

    #[tokio::test]
    async fn test_fee_above_balance_rolls_back() {
        let settings = WorkbenchSettings {
            opening_balance: dec!(100),
            ..WorkbenchSettings::instant()
        };
        let (store, _, svc) = service(settings);
        let before = store.snapshot().unwrap();
        let quote = svc.initiate("WA-0857").unwrap();
        let err = svc.confirm(quote).await.unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Termination(TerminationError::InsufficientBalance { .. })
        ));
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[tokio::test]
    async fn test_confirm_commits_and_emits_after_caller_gives_up() {
        let settings = WorkbenchSettings {
            settlement_delay_ms: 200,
            ..WorkbenchSettings::instant()
        };
        let (store, sink, svc) = service(settings);
        let quote = svc.initiate("WA-0856").unwrap();

        let outcome = tokio::time::timeout(Duration::from_millis(20), svc.confirm(quote)).await;
        assert!(outcome.is_err());
        assert!(sink.is_empty());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(store.snapshot().unwrap().agreement("WA-0856").is_none());
        assert_eq!(sink.len(), 2);
    }

    #[tokio::test]
    async fn test_audit_record_uses_active_locale_name() {
        let (store, _, svc) = service(WorkbenchSettings::instant());
        let quote = svc.initiate("WA-0856").unwrap();
        let customer_id = quote.customer_id.clone();
        let receipt = svc.confirm(quote).await.unwrap();

        let state = store.snapshot().unwrap();
        let customer = state.customers.iter().find(|c| c.id == customer_id).unwrap();
        let audit = state.request(&receipt.request_id).unwrap();
        assert_eq!(state.locale, Locale::Zh);
        assert_eq!(
            audit.customer_name.as_deref(),
            Some(customer.display_name(Locale::Zh))
        );
        assert_ne!(audit.customer_name.as_deref(), Some(customer.name_en.as_str()));
    }
}
