use crate::{
    abstract_trait::order::OrderRepositoryTrait,
    domain::entity::{Order, OrderItem},
    model::{OrderItemModel, OrderModel},
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::{DomainError, RepositoryError},
};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use std::collections::HashMap;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    /// Writes every item of `order` with a single multi-row insert.
    async fn insert_items(conn: &mut SqliteConnection, order: &Order) -> Result<(), sqlx::Error> {
        if order.items().is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "INSERT INTO order_items (id, order_id, product_id, name, price, quantity) ",
        );

        builder.push_values(order.items(), |mut row, item| {
            row.push_bind(item.id().to_owned())
                .push_bind(order.id().to_owned())
                .push_bind(item.product_id().to_owned())
                .push_bind(item.name().to_owned())
                .push_bind(item.price())
                .push_bind(item.quantity());
        });

        builder.build().execute(&mut *conn).await?;
        Ok(())
    }

    fn to_entity(row: OrderModel, items: Vec<OrderItemModel>) -> Result<Order, DomainError> {
        let items = items
            .into_iter()
            .map(|item| {
                OrderItem::new(item.id, item.name, item.price, item.product_id, item.quantity)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Order::new(row.id, row.customer_id, items)
    }

    async fn load_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await?;

        let orders = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT id, customer_id, total
            FROM orders
            ORDER BY rowid
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let items = sqlx::query_as::<_, OrderItemModel>(
            r#"
            SELECT id, name, price, quantity, order_id, product_id
            FROM order_items
            ORDER BY rowid
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        let mut items_by_order: HashMap<String, Vec<OrderItemModel>> = HashMap::new();
        for item in items {
            items_by_order
                .entry(item.order_id.clone())
                .or_default()
                .push(item);
        }

        let mut result = Vec::with_capacity(orders.len());
        for row in orders {
            let items = items_by_order.remove(&row.id).unwrap_or_default();
            result.push(Self::to_entity(row, items)?);
        }

        Ok(result)
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn create(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|err| {
            error!("❌ Failed to begin transaction for order {}: {:?}", order.id(), err);
            RepositoryError::from(err)
        })?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id, total)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(order.id())
        .bind(order.customer_id())
        .bind(order.total())
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order {} for customer {}: {:?}",
                order.id(),
                order.customer_id(),
                err
            );
            RepositoryError::from(err)
        })?;

        Self::insert_items(&mut *tx, order).await.map_err(|err| {
            error!("❌ Failed to create items of order {}: {:?}", order.id(), err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit order {}: {:?}", order.id(), err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order {} for customer {} with {} items, total {}",
            order.id(),
            order.customer_id(),
            order.items().len(),
            order.total()
        );
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|err| {
            error!("❌ Failed to begin transaction for order {}: {:?}", order.id(), err);
            RepositoryError::from(err)
        })?;

        sqlx::query(
            r#"
            DELETE FROM order_items
            WHERE order_id = $1
            "#,
        )
        .bind(order.id())
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete items of order {}: {:?}", order.id(), err);
            RepositoryError::from(err)
        })?;

        Self::insert_items(&mut *tx, order).await.map_err(|err| {
            error!("❌ Failed to recreate items of order {}: {:?}", order.id(), err);
            RepositoryError::from(err)
        })?;

        sqlx::query(
            r#"
            UPDATE orders
            SET total = $2
            WHERE id = $1
            "#,
        )
        .bind(order.id())
        .bind(order.total())
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update total of order {}: {:?}", order.id(), err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit update of order {}: {:?}", order.id(), err);
            RepositoryError::from(err)
        })?;

        info!(
            "🔄 Updated order {} with {} items, total {}",
            order.id(),
            order.items().len(),
            order.total()
        );
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|err| {
            error!("❌ Failed to acquire DB connection: {:?}", err);
            RepositoryError::from(err)
        })?;

        let row = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT id, customer_id, total
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or_else(|| {
            info!("🔍 Order {} not found", id);
            RepositoryError::not_found("Order")
        })?;

        let items = sqlx::query_as::<_, OrderItemModel>(
            r#"
            SELECT id, name, price, quantity, order_id, product_id
            FROM order_items
            WHERE order_id = $1
            ORDER BY rowid
            "#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch items of order {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        let order = Self::to_entity(row, items).map_err(|err| {
            error!("❌ Stored order {} is invalid: {}", id, err);
            RepositoryError::from(err)
        })?;

        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        info!("📦 Fetching all orders");

        let orders = self.load_all().await.map_err(|err| {
            error!("❌ Failed to fetch orders: {:?}", err);
            RepositoryError::retrieval("orders", err)
        })?;

        info!("📦 Found {} orders", orders.len());
        Ok(orders)
    }
}
