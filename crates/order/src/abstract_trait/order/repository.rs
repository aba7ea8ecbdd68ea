use crate::domain::entity::Order;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;

/// Persistence for the order aggregate. An order is always written and read
/// together with its items.
#[async_trait]
pub trait OrderRepositoryTrait {
    /// Inserts the order and all of its items. Fails with a storage error if
    /// the id is already taken.
    async fn create(&self, order: &Order) -> Result<(), RepositoryError>;

    /// Replaces the stored items with the current ones and rewrites the total,
    /// all in one transaction.
    async fn update(&self, order: &Order) -> Result<(), RepositoryError>;

    /// Fails with [`RepositoryError::NotFound`] when no order has this id.
    async fn find(&self, id: &str) -> Result<Order, RepositoryError>;

    /// Any failure is reported as [`RepositoryError::Retrieval`].
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
}
