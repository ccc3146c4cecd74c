//! Allocation advisor, fund selection and backtest capabilities.
//!
//! The construction wizard depends only on the traits in this module. The
//! built-in implementations are deterministic lookups plus a seedable random
//! walk; a real model can be dropped in behind the same traits.

mod advisor_model;
mod advisor_traits;
mod factor_selector;
mod keyword_advisor;
mod simulated_backtest;
mod verdict;

pub use advisor_model::*;
pub use advisor_traits::{AllocationAdvisor, BacktestEngine, FundSelector};
pub use factor_selector::FactorFundSelector;
pub use keyword_advisor::KeywordAllocationAdvisor;
pub use simulated_backtest::SimulatedBacktestEngine;
pub use verdict::{compute_stats, evaluate_verdict};
