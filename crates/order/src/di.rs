use crate::{abstract_trait::order::DynOrderRepository, repository::OrderRepository};
use customer::{abstract_trait::customer::DynCustomerRepository, repository::CustomerRepository};
use product::{abstract_trait::product::DynProductRepository, repository::ProductRepository};
use shared::{config::ConnectionPool, errors::RepositoryError, schema::TableSchema};
use std::{fmt, sync::Arc};

/// Every table the checkout context needs, referenced tables first.
pub fn checkout_tables() -> Vec<TableSchema> {
    [
        customer::model::TABLES,
        product::model::TABLES,
        crate::model::TABLES,
    ]
    .concat()
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub pool: ConnectionPool,
    pub customer_repository: DynCustomerRepository,
    pub product_repository: DynProductRepository,
    pub order_repository: DynOrderRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("customer_repository", &"CustomerRepository")
            .field("product_repository", &"ProductRepository")
            .field("order_repository", &"OrderRepository")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let customer_repository: DynCustomerRepository =
            Arc::new(CustomerRepository::new(pool.clone()));
        let product_repository: DynProductRepository =
            Arc::new(ProductRepository::new(pool.clone()));
        let order_repository: DynOrderRepository = Arc::new(OrderRepository::new(pool.clone()));

        Self {
            pool,
            customer_repository,
            product_repository,
            order_repository,
        }
    }

    pub async fn sync_schema(&self, force: bool) -> Result<(), RepositoryError> {
        shared::schema::sync_schema(&self.pool, &checkout_tables(), force).await
    }
}
