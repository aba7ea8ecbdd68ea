use serde::{Deserialize, Serialize};
use shared::schema::TableSchema;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
}

pub const ORDERS_TABLE: TableSchema = TableSchema {
    name: "orders",
    create: r#"
        CREATE TABLE IF NOT EXISTS orders (
            id          TEXT PRIMARY KEY NOT NULL,
            customer_id TEXT NOT NULL REFERENCES customers(id),
            total       REAL NOT NULL
        )
    "#,
};
