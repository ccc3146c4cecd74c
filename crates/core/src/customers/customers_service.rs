use log::debug;
use std::sync::Arc;

use super::customers_model::{Customer, CustomerFilter};
use super::customers_traits::CustomerServiceTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::state::AppStore;

pub struct CustomerService {
    store: Arc<AppStore>,
}

impl CustomerService {
    pub fn new(store: Arc<AppStore>) -> Self {
        Self { store }
    }
}

impl CustomerServiceTrait for CustomerService {
    fn list_customers(&self, filter: CustomerFilter) -> Result<Vec<Customer>> {
        debug!("Listing customers with filter {:?}", filter);
        self.store.read(|state| {
            state
                .customers
                .iter()
                .filter(|c| filter.matches(c))
                .cloned()
                .collect()
        })
    }

    fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        self.store
            .read(|state| state.customers.iter().find(|c| c.id == customer_id).cloned())?
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Customer not found: {}",
                    customer_id
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customers::CustomerStatus;
    use crate::fixtures::DemoSeed;
    use crate::settings::WorkbenchSettings;
    use crate::state::WorkbenchState;

    fn service() -> CustomerService {
        let state = WorkbenchState::from_seed(&DemoSeed, &WorkbenchSettings::instant());
        CustomerService::new(Arc::new(AppStore::new(state)))
    }

    #[test]
    fn test_filter_by_status() {
        let service = service();
        assert_eq!(service.list_customers(CustomerFilter::All).unwrap().len(), 5);
        let pending = service
            .list_customers(CustomerFilter::Status(CustomerStatus::Pending))
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "C003");
    }

    #[test]
    fn test_get_customer() {
        let service = service();
        assert_eq!(service.get_customer("C002").unwrap().name_en, "Sarah Chen");
        assert!(service.get_customer("C999").is_err());
    }
}
