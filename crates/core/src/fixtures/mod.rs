//! Seed data for the in-memory workbench.
//!
//! The workbench has no backend; a [`SeedSource`] stands in for one and
//! hands out fixed-shape record arrays.

mod demo_seed;
mod seed_traits;

pub use demo_seed::DemoSeed;
pub use seed_traits::SeedSource;

use crate::settings::WorkbenchSettings;
use crate::state::WorkbenchState;

impl WorkbenchState {
    /// Builds the initial state from a seed source.
    pub fn from_seed(seed: &dyn SeedSource, settings: &WorkbenchSettings) -> Self {
        let requests = seed.requests();
        let next_request_seq = requests.len() as u32 + 1;
        Self {
            locale: settings.locale,
            balance: settings.opening_balance,
            customers: seed.customers(),
            portfolios: seed.portfolios(),
            agreements: seed.agreements(),
            requests,
            fee_templates: seed.fee_templates(),
            next_request_seq,
        }
    }
}
