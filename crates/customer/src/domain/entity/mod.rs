mod address;
mod customer;

pub use self::address::Address;
pub use self::customer::Customer;
