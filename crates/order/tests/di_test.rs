use order::di::{DependenciesInject, checkout_tables};
use shared::{config::ConnectionManager, schema::table_names};

#[test]
fn tables_are_listed_parents_first() {
    let names: Vec<&str> = checkout_tables().iter().map(|table| table.name).collect();

    assert_eq!(names, vec!["customers", "products", "orders", "order_items"]);
}

#[tokio::test]
async fn container_syncs_the_whole_checkout_schema() {
    let pool = ConnectionManager::new_in_memory().await.unwrap();
    let deps = DependenciesInject::new(pool.clone());

    deps.sync_schema(false).await.unwrap();
    deps.sync_schema(false).await.unwrap();

    assert_eq!(
        table_names(&pool).await.unwrap(),
        vec!["customers", "order_items", "orders", "products"]
    );
    assert!(format!("{deps:?}").contains("OrderRepository"));
}
