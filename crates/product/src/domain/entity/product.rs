use serde::{Deserialize, Serialize};
use shared::{errors::DomainError, utils::validate_price};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    #[validate(length(min = 1, message = "Id is required"))]
    id: String,

    #[validate(length(min = 1, message = "Name is required"))]
    name: String,

    #[validate(custom(function = "validate_price"))]
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, DomainError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
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

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let mut next = self.clone();
        next.name = name.into();
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), DomainError> {
        let mut next = self.clone();
        next.price = price;
        next.validate()?;
        *self = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_id_and_name() {
        let err = Product::new("", "", 10.0).unwrap_err();
        assert_eq!(err.messages(), vec!["Id is required", "Name is required"]);
    }

    #[test]
    fn rejects_negative_price() {
        let err = Product::new("p1", "Sushi", -1.0).unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["Price must be greater than or equal to zero"]
        );
    }

    #[test]
    fn rejects_nan_and_infinite_prices() {
        assert!(Product::new("p1", "Sushi", f64::NAN).is_err());
        assert!(Product::new("p1", "Sushi", f64::INFINITY).is_err());

        let mut product = Product::new("p1", "Sushi", 30.0).unwrap();
        assert!(product.change_price(f64::NAN).is_err());
        assert_eq!(product.price(), 30.0);
    }

    #[test]
    fn failed_change_leaves_product_untouched() {
        let mut product = Product::new("p1", "Sushi", 30.0).unwrap();

        assert!(product.change_price(-5.0).is_err());
        assert!(product.change_name("").is_err());
        assert_eq!(product, Product::new("p1", "Sushi", 30.0).unwrap());

        product.change_name("Soup").unwrap();
        product.change_price(20.0).unwrap();
        assert_eq!(product.name(), "Soup");
        assert_eq!(product.price(), 20.0);
    }
}
