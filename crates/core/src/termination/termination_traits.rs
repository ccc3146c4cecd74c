use async_trait::async_trait;

use super::termination_model::{TerminationQuote, TerminationReceipt};
use crate::errors::Result;

#[async_trait]
pub trait TerminationServiceTrait: Send + Sync {
    /// Quotes the fee and net for a signed agreement without mutating state.
    fn initiate(&self, agreement_id: &str) -> Result<TerminationQuote>;

    /// Settles a previously quoted termination.
    async fn confirm(&self, quote: TerminationQuote) -> Result<TerminationReceipt>;
}
