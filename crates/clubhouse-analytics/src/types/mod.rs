pub mod requests;
pub mod responses;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Start date must not be after end date")]
    InvalidRange,
    #[error("Date range spans more than {0} days")]
    RangeTooLarge(i64),
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
