//! Domain events module.
//!
//! Services emit a [`DomainEvent`] through a [`DomainEventSink`] after every
//! committed store mutation. Front ends implement the sink to log, notify or
//! refresh views.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
