use serde::{Deserialize, Serialize};
use shared::{errors::DomainError, utils::validate_price};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    #[validate(length(min = 1, message = "Item id is required"))]
    id: String,

    #[validate(length(min = 1, message = "Item name is required"))]
    name: String,

    #[validate(custom(function = "validate_price"))]
    price: f64,

    #[validate(length(min = 1, message = "ProductId is required"))]
    product_id: String,

    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    quantity: i64,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i64,
    ) -> Result<Self, DomainError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
