use crate::customers::customers_model::{Customer, CustomerFilter};
use crate::errors::Result;

/// Read access to the investor roster.
pub trait CustomerServiceTrait: Send + Sync {
    fn list_customers(&self, filter: CustomerFilter) -> Result<Vec<Customer>>;
    fn get_customer(&self, customer_id: &str) -> Result<Customer>;
}
