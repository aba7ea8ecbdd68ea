use super::Address;
use serde::{Deserialize, Serialize};
use shared::errors::DomainError;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Customer {
    #[validate(length(min = 1, message = "Id is required"))]
    id: String,

    #[validate(length(min = 1, message = "Name is required"))]
    name: String,

    address: Option<Address>,
    active: bool,
    reward_points: i64,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Rebuilds a customer from stored state, enforcing the same rules as the
    /// mutators.
    pub fn restore(
        id: impl Into<String>,
        name: impl Into<String>,
        address: Option<Address>,
        active: bool,
        reward_points: i64,
    ) -> Result<Self, DomainError> {
        let mut customer = Self::new(id, name)?;
        customer.address = address;
        if active {
            customer.activate()?;
        }
        customer.add_reward_points(reward_points)?;
        Ok(customer)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> i64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let mut next = self.clone();
        next.name = name.into();
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::Rule(
                "Address is mandatory to activate a customer".to_string(),
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: i64) -> Result<(), DomainError> {
        if points < 0 {
            return Err(DomainError::Rule(
                "Reward points to add must not be negative".to_string(),
            ));
        }
        self.reward_points += points;
        Ok(())
    }
}
