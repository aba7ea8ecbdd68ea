#![allow(dead_code)]

use customer::domain::entity::{Address, Customer};
use order::{
    di::DependenciesInject,
    model::{OrderItemModel, OrderModel},
};
use product::domain::entity::Product;
use serde_json::{Value, json};
use shared::config::{ConnectionManager, ConnectionPool};

/// Fresh in-memory database with every checkout table created.
pub async fn setup() -> DependenciesInject {
    let pool = ConnectionManager::new_in_memory().await.unwrap();
    let deps = DependenciesInject::new(pool);
    deps.sync_schema(true).await.unwrap();
    deps
}

pub async fn create_customer(deps: &DependenciesInject, id: &str, name: &str) -> Customer {
    let mut customer = Customer::new(id, name).unwrap();
    customer.change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap());
    deps.customer_repository.create(&customer).await.unwrap();
    customer
}

pub async fn create_product(deps: &DependenciesInject, id: &str, name: &str, price: f64) -> Product {
    let product = Product::new(id, name, price).unwrap();
    deps.product_repository.create(&product).await.unwrap();
    product
}

/// The stored order row with its item rows nested under `items`.
pub async fn stored_order(pool: &ConnectionPool, id: &str) -> Value {
    let order = sqlx::query_as::<_, OrderModel>(
        "SELECT id, customer_id, total FROM orders WHERE id = $1",
    )
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap();

    let items = stored_items(pool, id).await;

    let mut value = serde_json::to_value(order).unwrap();
    value["items"] = json!(items);
    value
}

pub async fn stored_items(pool: &ConnectionPool, order_id: &str) -> Vec<OrderItemModel> {
    sqlx::query_as::<_, OrderItemModel>(
        r#"
        SELECT id, name, price, quantity, order_id, product_id
        FROM order_items
        WHERE order_id = $1
        ORDER BY rowid
        "#,
    )
    .bind(order_id)
    .fetch_all(pool)
    .await
    .unwrap()
}
