//! Database connection management and test utilities

mod connection;
pub mod test_utils;

pub use connection::{establish_connection, DbConnection};
