use crate::types::requests::StatsParams;
use crate::types::responses::PageViewStats;
use crate::types::AnalyticsError;
use async_trait::async_trait;
use clubhouse_entities::page_view_events;

/// Page view analytics operations
#[async_trait]
pub trait Analytics: Send + Sync {
    /// Persist one page view event.
    ///
    /// No write-time dedup: repeated calls for the same path/session create
    /// distinct events. Unique visitors are derived at read time by session
    /// grouping.
    async fn record_page_view(
        &self,
        path: &str,
        session_id: Option<String>,
        user_agent: Option<String>,
    ) -> Result<page_view_events::Model, AnalyticsError>;

    /// Compute aggregated statistics, compacting the raw table first when
    /// it has crossed the archive threshold.
    async fn get_page_view_stats(
        &self,
        params: StatsParams,
    ) -> Result<PageViewStats, AnalyticsError>;
}
