//! Advisory agreements held by investors.

mod agreements_model;

pub use agreements_model::{Agreement, AgreementStatus};
