mod repository;

pub use self::repository::{DynOrderRepository, OrderRepositoryTrait};
