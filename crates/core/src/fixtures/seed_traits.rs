use crate::agreements::Agreement;
use crate::customers::Customer;
use crate::fees::FeeTemplate;
use crate::portfolios::Portfolio;
use crate::requests::ReviewRequest;

/// Provider of the records a fresh workbench starts with.
pub trait SeedSource: Send + Sync {
    fn customers(&self) -> Vec<Customer>;

    fn portfolios(&self) -> Vec<Portfolio>;

    fn agreements(&self) -> Vec<Agreement>;

    fn requests(&self) -> Vec<ReviewRequest>;

    fn fee_templates(&self) -> Vec<FeeTemplate>;
}
