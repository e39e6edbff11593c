//! Customer/order persistence interfaces

use async_trait::async_trait;

use super::model::{Customer, CustomerId, CustomerOptionService, CustomerPackage, NewCustomer};
use crate::domain::DomainResult;

/// Write scope for one order registration.
///
/// Nothing written through it is visible until `commit`. A transaction that
/// is rolled back, or dropped without committing, leaves no rows behind.
#[async_trait]
pub trait OrderTransaction: Send {
    async fn insert_customer(&mut self, customer: NewCustomer) -> DomainResult<CustomerId>;

    async fn insert_optional_service(&mut self, link: CustomerOptionService) -> DomainResult<()>;

    async fn batch_insert_packages(&mut self, lines: Vec<CustomerPackage>) -> DomainResult<()>;

    async fn commit(&mut self) -> DomainResult<()>;

    async fn rollback(&mut self) -> DomainResult<()>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Open a new registration transaction
    async fn begin(&self) -> DomainResult<Box<dyn OrderTransaction>>;

    async fn find_customer(&self, id: CustomerId) -> DomainResult<Option<Customer>>;

    async fn find_packages(&self, customer_id: CustomerId) -> DomainResult<Vec<CustomerPackage>>;

    async fn find_optional_services(
        &self,
        customer_id: CustomerId,
    ) -> DomainResult<Vec<CustomerOptionService>>;

    async fn count_customers(&self) -> DomainResult<u64>;
}
