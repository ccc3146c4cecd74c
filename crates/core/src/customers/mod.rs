//! Customers module - investor roster.

mod customers_model;
mod customers_service;
mod customers_traits;

pub use customers_model::{Customer, CustomerFilter, CustomerStatus, RiskPreference};
pub use customers_service::CustomerService;
pub use customers_traits::CustomerServiceTrait;
