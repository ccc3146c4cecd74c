use rust_decimal::Decimal;
use thiserror::Error;

use crate::agreements::AgreementStatus;

#[derive(Error, Debug)]
pub enum TerminationError {
    #[error("Agreement not found: {0}")]
    AgreementNotFound(String),

    #[error("Agreement {id} is {status:?}; only signed agreements can be terminated")]
    NotSigned { id: String, status: AgreementStatus },

    #[error("Insufficient balance: {balance} available, {required} required")]
    InsufficientBalance { balance: Decimal, required: Decimal },
}

impl TerminationError {
    pub fn not_signed(id: impl Into<String>, status: AgreementStatus) -> Self {
        Self::NotSigned {
            id: id.into(),
            status,
        }
    }
}
