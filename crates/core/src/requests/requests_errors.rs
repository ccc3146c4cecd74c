//! Review queue error types.

use thiserror::Error;

use super::RequestStatus;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Request not found: {0}")]
    NotFound(String),

    /// SUCCESS and FAILED are terminal.
    #[error("Request '{id}' is already resolved as {status:?}")]
    AlreadyResolved { id: String, status: RequestStatus },

    #[error("Request '{id}' is not awaiting review (status {status:?})")]
    NotActive { id: String, status: RequestStatus },

    #[error("Request '{id}' has finished intake (status {status:?})")]
    IntakeComplete { id: String, status: RequestStatus },

    /// Rebalancing proposals are resolved through the rebalance editor.
    #[error("Request '{0}' must be resolved from the rebalance editor")]
    RequiresEditorReview(String),

    #[error("Request id '{0}' already exists")]
    DuplicateId(String),
}

impl RequestError {
    pub fn already_resolved(id: impl Into<String>, status: RequestStatus) -> Self {
        Self::AlreadyResolved {
            id: id.into(),
            status,
        }
    }
}
