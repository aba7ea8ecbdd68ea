use serde::{Deserialize, Serialize};
use shared::schema::TableSchema;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<i64>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: i64,
}

pub const CUSTOMERS_TABLE: TableSchema = TableSchema {
    name: "customers",
    create: r#"
        CREATE TABLE IF NOT EXISTS customers (
            id            TEXT PRIMARY KEY NOT NULL,
            name          TEXT NOT NULL,
            street        TEXT,
            number        INTEGER,
            zipcode       TEXT,
            city          TEXT,
            active        INTEGER NOT NULL,
            reward_points INTEGER NOT NULL
        )
    "#,
};

pub const TABLES: &[TableSchema] = &[CUSTOMERS_TABLE];
