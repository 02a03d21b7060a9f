use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of the public page view tracking endpoint
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecordPageViewRequest {
    /// Visited route, e.g. `/blogs/intro-to-rust`
    pub path: String,
    /// Client-generated stable identifier used for unique visitor counting
    pub session_id: Option<String>,
    /// Informational only; falls back to the User-Agent header
    pub user_agent: Option<String>,
}

/// Query parameters of the stats endpoint
///
/// Dates arrive as `YYYY-MM-DD` strings and are parsed in the handler so
/// that malformed values produce a proper problem response.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PageViewStatsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

/// Validated parameters handed to the aggregator
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub skip: Option<u64>,
    pub take: Option<u64>,
}
