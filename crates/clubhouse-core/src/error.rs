//! Common error types used across all Clubhouse services

use thiserror::Error;

/// Shared error type for infrastructure-level failures. Subsystem crates
/// define their own domain error enums and map them to problem responses
/// at the handler layer.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
