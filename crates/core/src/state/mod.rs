//! Central workbench state.
//!
//! Screens never hold their own copy of shared records. They read through
//! [`AppStore::read`] and change things only by dispatching a
//! [`StateAction`].

mod reducer;
mod state_model;
mod store;

pub use state_model::*;
pub use store::AppStore;

#[cfg(test)]
mod state_tests;
