use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wealthpulse_core::Workbench;

use crate::config::Config;
use crate::domain_events::TracingDomainEventSink;

/// Installs the stderr subscriber. `log` records from the core are bridged in.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_workbench(config: &Config) -> Workbench {
    let workbench = Workbench::demo(config.settings.clone(), Arc::new(TracingDomainEventSink));
    tracing::debug!("Demo workbench built from fixtures");
    workbench
}
