use serde::{Deserialize, Serialize};
use shared::schema::TableSchema;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

pub const PRODUCTS_TABLE: TableSchema = TableSchema {
    name: "products",
    create: r#"
        CREATE TABLE IF NOT EXISTS products (
            id    TEXT PRIMARY KEY NOT NULL,
            name  TEXT NOT NULL,
            price REAL NOT NULL
        )
    "#,
};

pub const TABLES: &[TableSchema] = &[PRODUCTS_TABLE];
