use async_trait::async_trait;

use crate::errors::Result;
use crate::i18n::Locale;
use crate::requests::requests_model::{
    NewReviewRequest, QueueCounts, QueueView, ReviewAction, ReviewDecision, ReviewRequest,
};

/// Trait for review queue operations
#[async_trait]
pub trait RequestServiceTrait: Send + Sync {
    fn list_requests(&self, view: QueueView) -> Result<Vec<ReviewRequest>>;
    fn get_request(&self, request_id: &str) -> Result<ReviewRequest>;
    fn counts(&self) -> Result<QueueCounts>;
    fn available_action(&self, request_id: &str) -> Result<ReviewAction>;
    async fn submit_request(&self, new_request: NewReviewRequest) -> Result<ReviewRequest>;
    async fn advance_request(&self, request_id: &str) -> Result<ReviewRequest>;
    async fn decide(&self, request_id: &str, decision: ReviewDecision) -> Result<ReviewRequest>;
    fn rationale(&self, request: &ReviewRequest, locale: Locale) -> String;
}
