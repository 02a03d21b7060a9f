//! Custom types for common data structures

use chrono::{DateTime as ChronoDateTime, Utc};

/// Database DateTime type used across all Clubhouse crates
///
/// This is the canonical datetime type for database TIMESTAMPTZ columns.
pub type DBDateTime = ChronoDateTime<Utc>;

/// Standard UTC DateTime type used across all Clubhouse crates
///
/// This is the canonical datetime type for API responses (serializes as
/// ISO 8601 with 'Z' suffix) and database TIMESTAMPTZ columns.
///
/// # OpenAPI Schema
/// When using with utoipa, add the schema attribute:
/// ```rust
/// use clubhouse_core::UtcDateTime;
/// use serde::Serialize;
/// use utoipa::ToSchema;
///
/// #[derive(Serialize, ToSchema)]
/// pub struct Response {
///     #[schema(value_type = String, format = DateTime)]
///     pub created_at: UtcDateTime,
/// }
/// ```
pub type UtcDateTime = ChronoDateTime<Utc>;
