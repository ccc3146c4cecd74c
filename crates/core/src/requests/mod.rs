//! Requests module - the audit / compliance review queue.

mod requests_errors;
mod requests_model;
mod requests_service;
mod requests_traits;

pub use requests_errors::RequestError;
pub use requests_model::*;
pub use requests_service::RequestService;
pub use requests_traits::RequestServiceTrait;
