//! WealthPulse Core - advisor workbench domain and workflows.
//!
//! This crate holds the in-memory application state, the workflows that
//! mutate it (portfolio construction wizard, manual rebalance, review queue,
//! agreement termination) and the capability traits those workflows depend
//! on. It performs no I/O beyond simulated processing delays.

pub mod advisor;
pub mod agreements;
pub mod constants;
pub mod customers;
pub mod errors;
pub mod events;
pub mod fees;
pub mod fixtures;
pub mod i18n;
pub mod portfolios;
pub mod rebalance;
pub mod requests;
pub mod settings;
pub mod state;
pub mod summary;
pub mod templates;
pub mod termination;
pub mod weights;
pub mod wizard;
pub mod workbench;

pub use workbench::Workbench;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
