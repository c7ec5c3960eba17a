//! Customer repository interface

use async_trait::async_trait;

use super::model::{Customer, NewCustomer};
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Customer>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Customer>>;

    async fn save(&self, customer: NewCustomer) -> DomainResult<Customer>;
}
