//! Table definitions and the `sync` step that materialises them.
//!
//! Every model crate publishes its tables as [`TableSchema`] values in
//! dependency order (referenced tables first). [`sync_schema`] creates the
//! missing ones; with `force` set it drops all of them first, which is what
//! the test suites use to start from an empty database.

use crate::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub create: &'static str,
}

pub async fn sync_schema(
    pool: &ConnectionPool,
    tables: &[TableSchema],
    force: bool,
) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await.map_err(|err| {
        error!("❌ Failed to open schema sync transaction: {:?}", err);
        RepositoryError::from(err)
    })?;

    if force {
        for table in tables.iter().rev() {
            sqlx::query(&format!("DROP TABLE IF EXISTS {}", table.name))
                .execute(&mut *tx)
                .await
                .map_err(|err| {
                    error!("❌ Failed to drop table {}: {:?}", table.name, err);
                    RepositoryError::from(err)
                })?;
        }
    }

    for table in tables {
        sqlx::query(table.create)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to create table {}: {:?}", table.name, err);
                RepositoryError::from(err)
            })?;
    }

    tx.commit().await.map_err(RepositoryError::from)?;

    info!("🧱 Synced {} tables (force = {})", tables.len(), force);
    Ok(())
}

/// Names of the user tables currently present, sorted.
pub async fn table_names(pool: &ConnectionPool) -> Result<Vec<String>, RepositoryError> {
    let names: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT name FROM sqlite_master
        WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(names.into_iter().map(|(name,)| name).collect())
}
