use serde::{Deserialize, Serialize};
use shared::schema::TableSchema;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub order_id: String,
    pub product_id: String,
}

pub const ORDER_ITEMS_TABLE: TableSchema = TableSchema {
    name: "order_items",
    create: r#"
        CREATE TABLE IF NOT EXISTS order_items (
            id         TEXT PRIMARY KEY NOT NULL,
            order_id   TEXT NOT NULL REFERENCES orders(id),
            product_id TEXT NOT NULL REFERENCES products(id),
            name       TEXT NOT NULL,
            price      REAL NOT NULL,
            quantity   INTEGER NOT NULL
        )
    "#,
};
