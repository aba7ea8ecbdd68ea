use crate::{
    abstract_trait::product::ProductRepositoryTrait, domain::entity::Product,
    model::ProductModel,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::{DomainError, RepositoryError},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    fn to_entity(row: ProductModel) -> Result<Product, DomainError> {
        Product::new(row.id, row.name, row.price)
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, price)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(product.id())
        .bind(product.name())
        .bind(product.price())
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.id(), err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product {}", product.id());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            UPDATE products
            SET name  = $2,
                price = $3
            WHERE id = $1
            "#,
        )
        .bind(product.id())
        .bind(product.name())
        .bind(product.price())
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product {}: {:?}", product.id(), err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated product {}", product.id());
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or_else(|| {
            info!("🔍 Product {} not found", id);
            RepositoryError::not_found("Product")
        })?;

        Ok(Self::to_entity(row)?)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        info!("📦 Fetching all products");

        let rows = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT id, name, price
            FROM products
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch products: {:?}", err);
            RepositoryError::retrieval("products", err.into())
        })?;

        rows.into_iter()
            .map(|row| {
                Self::to_entity(row)
                    .map_err(|err| RepositoryError::retrieval("products", err.into()))
            })
            .collect()
    }
}
