mod repository;

pub use self::repository::{CustomerRepositoryTrait, DynCustomerRepository};
