use crate::domain::entity::Customer;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCustomerRepository = Arc<dyn CustomerRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerRepositoryTrait {
    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError>;
    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError>;
    async fn find(&self, id: &str) -> Result<Customer, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;
}
