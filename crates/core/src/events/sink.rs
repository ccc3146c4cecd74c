//! Where committed workbench changes are reported.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Receiver for the facts produced by workbench commits.
///
/// Services emit from the same task that committed the batch, right after
/// `AppStore::dispatch_all` returns. A caller that stops waiting on a
/// settlement or rebalance therefore still sees its events delivered.
/// Emitting never feeds back into the workflow.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);

    /// Delivers the events of one commit in order.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        events.into_iter().for_each(|event| self.emit(event));
    }
}

/// Drops everything, for callers that do not observe events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Records events in arrival order so tests can assert on them.
///
/// Clones share one log, which lets a test keep a handle while the
/// service owns another.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    log: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the recorded events, oldest first.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.log.lock().map(|log| log.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        if let Ok(mut log) = self.log.lock() {
            log.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::RequestStatus;
    use rust_decimal_macros::dec;

    #[test]
    fn test_noop_sink_accepts_a_settlement_batch() {
        let sink = NoOpDomainEventSink;
        sink.emit_batch(vec![
            DomainEvent::agreement_terminated("WA-0856", dec!(1250), dec!(1248750)),
            DomainEvent::request_submitted("TM-20240316-006"),
        ]);
    }

    #[test]
    fn test_recording_sink_keeps_commit_order() {
        let sink = MockDomainEventSink::new();
        let shared = sink.clone();

        sink.emit_batch(vec![
            DomainEvent::portfolio_rebalanced("P01", Some("AI-20240316-001".to_string())),
            DomainEvent::request_resolved("AI-20240316-001", RequestStatus::Success),
        ]);
        assert_eq!(
            shared.events(),
            vec![
                DomainEvent::portfolio_rebalanced("P01", Some("AI-20240316-001".to_string())),
                DomainEvent::request_resolved("AI-20240316-001", RequestStatus::Success),
            ]
        );

        shared.clear();
        assert!(sink.is_empty());
    }
}
