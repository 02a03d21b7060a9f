use clubhouse_core::UtcDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Created event returned by the tracking endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageViewEventResponse {
    pub id: i64,
    pub path: String,
    pub session_id: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: UtcDateTime,
}

/// Views for a single calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyViewCount {
    /// `YYYY-MM-DD`
    pub date: String,
    pub count: i64,
}

/// Views for a single path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PathViewCount {
    pub path: String,
    pub views: i64,
}

/// Aggregated page view statistics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageViewStats {
    /// Views within the filter; includes archived totals when unfiltered
    pub total_views: i64,
    /// Distinct non-null session ids within the filter
    pub unique_users: i64,
    /// Trailing-window count from now; 0 when a date range was requested
    pub views_last_7_days: i64,
    /// Trailing-window count from now; 0 when a date range was requested
    pub views_last_30_days: i64,
    pub daily_views: Vec<DailyViewCount>,
    pub top_pages: Vec<PathViewCount>,
    pub views_by_path: Vec<PathViewCount>,
    /// Distinct paths within the filter, ignoring pagination
    pub total_paths: i64,
}
