mod customer;

pub use self::customer::{CUSTOMERS_TABLE, Customer as CustomerModel, TABLES};
