use crate::domain::entity::Product;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn find(&self, id: &str) -> Result<Product, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
