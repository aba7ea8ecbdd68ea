pub mod config;
pub mod errors;
pub mod schema;
pub mod utils;
