use crate::{
    abstract_trait::customer::CustomerRepositoryTrait,
    domain::entity::{Address, Customer},
    model::CustomerModel,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::{DomainError, RepositoryError},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct CustomerRepository {
    db: ConnectionPool,
}

impl CustomerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    fn to_entity(row: CustomerModel) -> Result<Customer, DomainError> {
        let address = match (row.street, row.number, row.zipcode, row.city) {
            (Some(street), Some(number), Some(zip), Some(city)) => {
                Some(Address::new(street, number, zip, city)?)
            }
            _ => None,
        };

        Customer::restore(row.id, row.name, address, row.active, row.reward_points)
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let address = customer.address();

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(customer.id())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points())
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create customer {}: {:?}", customer.id(), err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created customer {}", customer.id());
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let address = customer.address();

        sqlx::query(
            r#"
            UPDATE customers
            SET name          = $2,
                street        = $3,
                number        = $4,
                zipcode       = $5,
                city          = $6,
                active        = $7,
                reward_points = $8
            WHERE id = $1
            "#,
        )
        .bind(customer.id())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points())
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update customer {}: {:?}", customer.id(), err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated customer {}", customer.id());
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Customer, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerModel>(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch customer {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or_else(|| {
            info!("🔍 Customer {} not found", id);
            RepositoryError::not_found("Customer")
        })?;

        Ok(Self::to_entity(row)?)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        info!("👥 Fetching all customers");

        let rows = sqlx::query_as::<_, CustomerModel>(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch customers: {:?}", err);
            RepositoryError::retrieval("customers", err.into())
        })?;

        rows.into_iter()
            .map(|row| {
                Self::to_entity(row)
                    .map_err(|err| RepositoryError::retrieval("customers", err.into()))
            })
            .collect()
    }
}
