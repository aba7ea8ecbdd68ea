mod order;
mod order_item;

pub use self::order::Order;
pub use self::order_item::OrderItem;
