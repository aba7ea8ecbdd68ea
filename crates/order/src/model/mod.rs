mod order;
mod order_item;

use shared::schema::TableSchema;

pub use self::order::{ORDERS_TABLE, Order as OrderModel};
pub use self::order_item::{ORDER_ITEMS_TABLE, OrderItem as OrderItemModel};

/// Tables owned by the order aggregate, parents first.
pub const TABLES: &[TableSchema] = &[ORDERS_TABLE, ORDER_ITEMS_TABLE];
