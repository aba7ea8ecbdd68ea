mod domain;
mod repository;

pub use self::domain::DomainError;
pub use self::repository::RepositoryError;
