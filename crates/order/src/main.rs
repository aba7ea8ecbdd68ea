use anyhow::{Context, Result};
use order::di::DependenciesInject;
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    init_logger("order-service", config.dev_mode, config.enable_file_log);

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    let deps = DependenciesInject::new(db_pool.clone());

    if config.run_schema_sync {
        deps.sync_schema(false)
            .await
            .context("Failed to sync database schema")?;
    }

    info!("✅ Application setup completed successfully.");

    let orders = deps
        .order_repository
        .find_all()
        .await
        .context("Failed to load stored orders")?;

    let revenue: f64 = orders.iter().map(|order| order.total()).sum();

    for order in &orders {
        info!(
            order_id = order.id(),
            customer_id = order.customer_id(),
            items = order.items().len(),
            total = order.total(),
            "📦 Stored order"
        );
    }

    info!(
        "📊 {} orders stored, combined total {:.2}",
        orders.len(),
        revenue
    );

    db_pool.close().await;
    info!("✅ Order service shutdown complete.");

    Ok(())
}
