//! Domain event sink that writes every event to the tracing log.

use wealthpulse_core::events::{DomainEvent, DomainEventSink};

#[derive(Clone, Default)]
pub struct TracingDomainEventSink;

impl DomainEventSink for TracingDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => tracing::info!(target: "wealthpulse::events", %payload, "domain event"),
            Err(e) => tracing::warn!("Failed to serialize domain event: {}", e),
        }
    }
}
