mod product;

pub use self::product::{PRODUCTS_TABLE, Product as ProductModel, TABLES};
