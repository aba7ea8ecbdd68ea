use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, time::Duration};

pub type ConnectionPool = Pool<Sqlite>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        connection_string: &str,
        min_connections: u32,
        max_connections: u32,
    ) -> anyhow::Result<ConnectionPool> {
        if connection_string.contains(":memory:") {
            return Self::new_in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(connection_string)
            .map_err(|err| anyhow::anyhow!("Invalid database url {}: {}", connection_string, err))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(min_connections)
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }

    /// Every connection to `sqlite::memory:` opens its own private database,
    /// so the pool is pinned to one connection that never idles out.
    pub async fn new_in_memory() -> anyhow::Result<ConnectionPool> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|err| anyhow::anyhow!("Invalid in-memory database url: {}", err))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create in-memory database pool: {}", err))?;

        Ok(pool)
    }
}
