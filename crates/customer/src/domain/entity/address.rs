use serde::{Deserialize, Serialize};
use shared::errors::DomainError;
use std::fmt;
use validator::Validate;

/// Postal address of a customer. Immutable; replace it to change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Address {
    #[validate(length(min = 1, message = "Street is required"))]
    street: String,

    #[validate(range(min = 1, message = "Number must be greater than 0"))]
    number: i64,

    #[validate(length(min = 1, message = "Zip is required"))]
    zip: String,

    #[validate(length(min = 1, message = "City is required"))]
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: i64,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
