use super::OrderItem;
use serde::{Deserialize, Serialize};
use shared::errors::DomainError;
use validator::Validate;

/// Aggregate root of the checkout context. The total is never stored on the
/// entity; it is derived from the items every time it is asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    #[validate(length(min = 1, message = "Id is required"))]
    id: String,

    #[validate(length(min = 1, message = "CustomerId is required"))]
    customer_id: String,

    #[validate(length(min = 1, message = "Items are required"), nested)]
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, DomainError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Replaces the whole item set. On error the order keeps its old items.
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> Result<(), DomainError> {
        let next = Self {
            id: self.id.clone(),
            customer_id: self.customer_id.clone(),
            items,
        };
        next.validate()?;
        *self = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: i64) -> OrderItem {
        OrderItem::new(id, format!("Item {id}"), price, "p1", quantity).unwrap()
    }

    #[test]
    fn rejects_empty_id() {
        let err = Order::new("", "123", vec![item("i1", 10.0, 1)]).unwrap_err();
        assert_eq!(err.messages(), vec!["Id is required"]);
    }

    #[test]
    fn rejects_empty_customer_id() {
        let err = Order::new("123", "", vec![item("i1", 10.0, 1)]).unwrap_err();
        assert_eq!(err.messages(), vec!["CustomerId is required"]);
    }

    #[test]
    fn rejects_order_without_items() {
        let err = Order::new("123", "123", vec![]).unwrap_err();
        assert_eq!(err.messages(), vec!["Items are required"]);
    }

    #[test]
    fn rejects_item_with_zero_quantity() {
        let err = OrderItem::new("i1", "Item", 10.0, "p1", 0).unwrap_err();
        assert_eq!(err.messages(), vec!["Quantity must be greater than 0"]);
    }

    #[test]
    fn rejects_item_with_nan_or_infinite_price() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            let err = OrderItem::new("i1", "Item", price, "p1", 1).unwrap_err();
            assert_eq!(
                err.messages(),
                vec!["Price must be greater than or equal to zero"]
            );
        }
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let order = Order::new(
            "o1",
            "c1",
            vec![item("i1", 100.0, 2), item("i2", 200.0, 2)],
        )
        .unwrap();

        assert_eq!(order.items()[0].total(), 200.0);
        assert_eq!(order.total(), 600.0);
    }

    #[test]
    fn total_follows_item_changes() {
        let mut order = Order::new("o1", "c1", vec![item("i1", 30.0, 3)]).unwrap();
        assert_eq!(order.total(), 90.0);

        order.change_items(vec![item("i2", 20.0, 2)]).unwrap();
        assert_eq!(order.total(), 40.0);
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].id(), "i2");
    }

    #[test]
    fn change_items_to_empty_is_rejected_and_keeps_old_items() {
        let mut order = Order::new("o1", "c1", vec![item("i1", 30.0, 3)]).unwrap();

        assert!(order.change_items(vec![]).is_err());
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total(), 90.0);
    }
}
