mod logs;
mod validation;

pub use self::logs::init_logger;
pub use self::validation::validate_price;
