use std::sync::Arc;

use super::fees_model::FeeTemplate;
use crate::errors::Result;
use crate::state::AppStore;

pub struct FeeService {
    store: Arc<AppStore>,
}

impl FeeService {
    pub fn new(store: Arc<AppStore>) -> Self {
        Self { store }
    }

    pub fn list_templates(&self) -> Result<Vec<FeeTemplate>> {
        self.store.read(|state| state.fee_templates.clone())
    }
}
