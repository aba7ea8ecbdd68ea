mod repository;

pub use self::repository::{DynProductRepository, ProductRepositoryTrait};
