use crate::traits::Analytics;
use crate::types::requests::StatsParams;
use crate::types::responses::{DailyViewCount, PageViewStats, PathViewCount};
use crate::types::AnalyticsError;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use clubhouse_core::UtcDateTime;
use clubhouse_entities::{archived_page_view_counts, page_view_events};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, IsolationLevel, PaginatorTrait, QueryFilter, Set, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::info;

/// Raw event count at which the compactor folds the table into a summary
pub const ARCHIVE_THRESHOLD: u64 = 500;

/// Upper bound on the day-by-day aggregation window
pub const MAX_RANGE_DAYS: i64 = 90;

const DEFAULT_PAGE_SIZE: u64 = 50;
const MAX_PAGE_SIZE: u64 = 500;
const TOP_PAGES_LIMIT: u64 = 10;
const DEFAULT_DAILY_WINDOW_DAYS: i64 = 7;

/// Timestamp filter derived from the requested date range
#[derive(Debug, Clone, Copy, Default)]
struct RangeFilter {
    from: Option<UtcDateTime>,
    to: Option<UtcDateTime>,
}

impl RangeFilter {
    fn is_unfiltered(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

pub struct AnalyticsService {
    db: Arc<DatabaseConnection>,
}

impl AnalyticsService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        AnalyticsService { db }
    }

    /// Fold the raw event table into a single archive row once it has
    /// crossed the threshold.
    ///
    /// The count is taken twice: once outside the transaction as a cheap
    /// gate, and again inside a serializable transaction before acting.
    /// Two concurrent stats requests can both pass the outer gate; the
    /// serializable re-check collapses the race to at most one archive row
    /// per threshold crossing (the loser fails with a serialization error
    /// and the whole stats call is safe to retry).
    async fn archive_if_needed(&self) -> Result<(), AnalyticsError> {
        let count = page_view_events::Entity::find()
            .count(self.db.as_ref())
            .await?;
        if count < ARCHIVE_THRESHOLD {
            return Ok(());
        }

        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::Serializable), None)
            .await?;

        let recount = page_view_events::Entity::find().count(&txn).await?;
        if recount >= ARCHIVE_THRESHOLD {
            archived_page_view_counts::ActiveModel {
                count: Set(recount as i64),
                archived_at: Set(Utc::now()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            page_view_events::Entity::delete_many().exec(&txn).await?;

            info!(archived = recount, "compacted raw page view events");
        }

        txn.commit().await?;
        Ok(())
    }

    /// Validate the requested range and produce the timestamp filter plus
    /// the effective window for the daily series.
    fn resolve_range(
        params: &StatsParams,
    ) -> Result<(RangeFilter, NaiveDate, NaiveDate), AnalyticsError> {
        if let (Some(start), Some(end)) = (params.start_date, params.end_date) {
            if start > end {
                return Err(AnalyticsError::InvalidRange);
            }
        }

        let today = Utc::now().date_naive();
        let effective_end = params.end_date.unwrap_or(today);
        let effective_start = params
            .start_date
            .unwrap_or(effective_end - Duration::days(DEFAULT_DAILY_WINDOW_DAYS - 1));

        if params.start_date.is_some() || params.end_date.is_some() {
            let span_days = (effective_end - effective_start).num_days() + 1;
            if span_days > MAX_RANGE_DAYS {
                return Err(AnalyticsError::RangeTooLarge(MAX_RANGE_DAYS));
            }
        }

        let filter = RangeFilter {
            from: params.start_date.map(day_start),
            to: params.end_date.map(day_end),
        };

        Ok((filter, effective_start, effective_end))
    }

    fn resolve_pagination(params: &StatsParams) -> Result<(u64, u64), AnalyticsError> {
        let take = params.take.unwrap_or(DEFAULT_PAGE_SIZE);
        if take == 0 {
            return Err(AnalyticsError::InvalidInput(
                "take must be a positive integer".to_string(),
            ));
        }
        let take = take.min(MAX_PAGE_SIZE);
        let skip = params.skip.unwrap_or(0);
        Ok((skip, take))
    }

    async fn fetch_total_views(&self, filter: &RangeFilter) -> Result<i64, AnalyticsError> {
        let mut query = page_view_events::Entity::find();
        if let Some(from) = filter.from {
            query = query.filter(page_view_events::Column::Timestamp.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(page_view_events::Column::Timestamp.lte(to));
        }

        let raw_count = query.count(self.db.as_ref()).await? as i64;

        // Archived totals only ever apply to the unfiltered, all-time view.
        // A date-ranged query cannot recover per-day detail from archived
        // rows, since that detail was discarded at archival time.
        if filter.is_unfiltered() {
            Ok(raw_count + self.fetch_archived_total().await?)
        } else {
            Ok(raw_count)
        }
    }

    async fn fetch_archived_total(&self) -> Result<i64, AnalyticsError> {
        #[derive(FromQueryResult)]
        struct ArchivedTotal {
            total: i64,
        }

        let result = ArchivedTotal::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT COALESCE(SUM(count), 0)::bigint AS total FROM archived_page_view_counts"
                .to_owned(),
        ))
        .one(self.db.as_ref())
        .await?;

        Ok(result.map(|r| r.total).unwrap_or(0))
    }

    async fn fetch_unique_users(&self, filter: &RangeFilter) -> Result<i64, AnalyticsError> {
        let mut where_conditions = vec!["session_id IS NOT NULL".to_string()];
        let mut values: Vec<sea_orm::Value> = Vec::new();
        let mut param_index = 1;

        if let Some(from) = filter.from {
            where_conditions.push(format!("timestamp >= ${}", param_index));
            values.push(from.into());
            param_index += 1;
        }

        if let Some(to) = filter.to {
            where_conditions.push(format!("timestamp <= ${}", param_index));
            values.push(to.into());
        }

        let sql_query = format!(
            r#"
            SELECT COUNT(DISTINCT session_id)::bigint AS unique_sessions
            FROM page_view_events
            WHERE {}
            "#,
            where_conditions.join(" AND ")
        );

        #[derive(FromQueryResult)]
        struct UniqueSessions {
            unique_sessions: i64,
        }

        let result = UniqueSessions::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql_query,
            values,
        ))
        .one(self.db.as_ref())
        .await?;

        Ok(result.map(|r| r.unique_sessions).unwrap_or(0))
    }

    /// Per-calendar-day counts over the effective window, zero-filled for
    /// days without events. The window is bounded to `MAX_RANGE_DAYS`
    /// entries by `resolve_range`.
    async fn fetch_daily_views(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyViewCount>, AnalyticsError> {
        let sql_query = r#"
            WITH days AS (
                SELECT generate_series($1::date, $2::date, '1 day'::interval)::date AS day
            ),
            daily_counts AS (
                SELECT timestamp::date AS day, COUNT(*) AS views
                FROM page_view_events
                WHERE timestamp >= $3 AND timestamp <= $4
                GROUP BY timestamp::date
            )
            SELECT
                to_char(d.day, 'YYYY-MM-DD') AS date,
                COALESCE(dc.views, 0)::bigint AS count
            FROM days d
            LEFT JOIN daily_counts dc ON d.day = dc.day
            ORDER BY d.day
            "#;

        #[derive(FromQueryResult)]
        struct DailyRow {
            date: String,
            count: i64,
        }

        let rows = DailyRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql_query,
            vec![
                start.into(),
                end.into(),
                day_start(start).into(),
                day_end(end).into(),
            ],
        ))
        .all(self.db.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DailyViewCount {
                date: r.date,
                count: r.count,
            })
            .collect())
    }

    /// Top pages by view count within the filter.
    ///
    /// Equal counts order by path ascending so the result is deterministic.
    async fn fetch_top_pages(
        &self,
        filter: &RangeFilter,
    ) -> Result<Vec<PathViewCount>, AnalyticsError> {
        let (where_clause, mut values, param_index) = range_where_clause(filter);
        let sql_query = format!(
            r#"
            SELECT path, COUNT(*)::bigint AS views
            FROM page_view_events
            WHERE {}
            GROUP BY path
            ORDER BY views DESC, path ASC
            LIMIT ${}
            "#,
            where_clause, param_index
        );
        values.push((TOP_PAGES_LIMIT as i64).into());

        self.fetch_path_counts(sql_query, values).await
    }

    /// Full per-path breakdown, paginated with skip/take.
    async fn fetch_views_by_path(
        &self,
        filter: &RangeFilter,
        skip: u64,
        take: u64,
    ) -> Result<Vec<PathViewCount>, AnalyticsError> {
        let (where_clause, mut values, param_index) = range_where_clause(filter);
        let sql_query = format!(
            r#"
            SELECT path, COUNT(*)::bigint AS views
            FROM page_view_events
            WHERE {}
            GROUP BY path
            ORDER BY views DESC, path ASC
            LIMIT ${} OFFSET ${}
            "#,
            where_clause,
            param_index,
            param_index + 1
        );
        values.push((take as i64).into());
        values.push((skip as i64).into());

        self.fetch_path_counts(sql_query, values).await
    }

    async fn fetch_path_counts(
        &self,
        sql_query: String,
        values: Vec<sea_orm::Value>,
    ) -> Result<Vec<PathViewCount>, AnalyticsError> {
        #[derive(FromQueryResult)]
        struct PathRow {
            path: String,
            views: i64,
        }

        let rows = PathRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql_query,
            values,
        ))
        .all(self.db.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| PathViewCount {
                path: r.path,
                views: r.views,
            })
            .collect())
    }

    async fn fetch_total_paths(&self, filter: &RangeFilter) -> Result<i64, AnalyticsError> {
        let (where_clause, values, _) = range_where_clause(filter);
        let sql_query = format!(
            r#"
            SELECT COUNT(DISTINCT path)::bigint AS total FROM page_view_events WHERE {}
            "#,
            where_clause
        );

        #[derive(FromQueryResult)]
        struct TotalPaths {
            total: i64,
        }

        let result = TotalPaths::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql_query,
            values,
        ))
        .one(self.db.as_ref())
        .await?;

        Ok(result.map(|r| r.total).unwrap_or(0))
    }

    /// Unfiltered count over a trailing window ending now
    async fn fetch_trailing_window(&self, days: i64) -> Result<i64, AnalyticsError> {
        let since = Utc::now() - Duration::days(days);
        let count = page_view_events::Entity::find()
            .filter(page_view_events::Column::Timestamp.gte(since))
            .count(self.db.as_ref())
            .await?;
        Ok(count as i64)
    }
}

#[async_trait]
impl Analytics for AnalyticsService {
    async fn record_page_view(
        &self,
        path: &str,
        session_id: Option<String>,
        user_agent: Option<String>,
    ) -> Result<page_view_events::Model, AnalyticsError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(AnalyticsError::InvalidInput(
                "path must not be empty".to_string(),
            ));
        }

        let event = page_view_events::ActiveModel {
            path: Set(path.to_string()),
            session_id: Set(session_id.filter(|s| !s.trim().is_empty())),
            user_agent: Set(user_agent),
            timestamp: Set(Utc::now()),
            ..Default::default()
        };

        Ok(event.insert(self.db.as_ref()).await?)
    }

    async fn get_page_view_stats(
        &self,
        params: StatsParams,
    ) -> Result<PageViewStats, AnalyticsError> {
        let (filter, effective_start, effective_end) = Self::resolve_range(&params)?;
        let (skip, take) = Self::resolve_pagination(&params)?;

        // Compaction runs inline before every stats computation; there is
        // no separate scheduler for it.
        self.archive_if_needed().await?;

        let total_views = self.fetch_total_views(&filter).await?;
        let unique_users = self.fetch_unique_users(&filter).await?;
        let daily_views = self.fetch_daily_views(effective_start, effective_end).await?;

        // The three group-by queries are read-only and mutually
        // independent, so they run concurrently.
        let (top_pages, views_by_path, total_paths) = futures::try_join!(
            self.fetch_top_pages(&filter),
            self.fetch_views_by_path(&filter, skip, take),
            self.fetch_total_paths(&filter),
        )?;

        let (views_last_7_days, views_last_30_days) = if filter.is_unfiltered() {
            futures::try_join!(self.fetch_trailing_window(7), self.fetch_trailing_window(30))?
        } else {
            (0, 0)
        };

        Ok(PageViewStats {
            total_views,
            unique_users,
            views_last_7_days,
            views_last_30_days,
            daily_views,
            top_pages,
            views_by_path,
            total_paths,
        })
    }
}

/// Build the shared timestamp WHERE clause for the raw-SQL aggregations.
/// Returns the clause, bound values and the next free parameter index.
fn range_where_clause(filter: &RangeFilter) -> (String, Vec<sea_orm::Value>, usize) {
    let mut where_conditions = vec!["TRUE".to_string()];
    let mut values: Vec<sea_orm::Value> = Vec::new();
    let mut param_index = 1;

    if let Some(from) = filter.from {
        where_conditions.push(format!("timestamp >= ${}", param_index));
        values.push(from.into());
        param_index += 1;
    }

    if let Some(to) = filter.to {
        where_conditions.push(format!("timestamp <= ${}", param_index));
        values.push(to.into());
        param_index += 1;
    }

    (where_conditions.join(" AND "), values, param_index)
}

fn day_start(date: NaiveDate) -> UtcDateTime {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn day_end(date: NaiveDate) -> UtcDateTime {
    // 23:59:59 exists for every calendar day
    date.and_hms_opt(23, 59, 59).unwrap().and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn resolve_range_rejects_inverted_dates() {
        let params = StatsParams {
            start_date: Some(date("2025-05-10")),
            end_date: Some(date("2025-05-01")),
            ..Default::default()
        };
        assert!(matches!(
            AnalyticsService::resolve_range(&params),
            Err(AnalyticsError::InvalidRange)
        ));
    }

    #[test]
    fn resolve_range_rejects_spans_over_ninety_days() {
        let params = StatsParams {
            start_date: Some(date("2025-01-01")),
            end_date: Some(date("2025-06-01")),
            ..Default::default()
        };
        assert!(matches!(
            AnalyticsService::resolve_range(&params),
            Err(AnalyticsError::RangeTooLarge(_))
        ));
    }

    #[test]
    fn resolve_range_accepts_exactly_ninety_days() {
        let params = StatsParams {
            start_date: Some(date("2025-01-01")),
            end_date: Some(date("2025-03-31")),
            ..Default::default()
        };
        let (filter, start, end) = AnalyticsService::resolve_range(&params).unwrap();
        assert_eq!(start, date("2025-01-01"));
        assert_eq!(end, date("2025-03-31"));
        assert_eq!(filter.from.unwrap(), day_start(date("2025-01-01")));
        assert_eq!(filter.to.unwrap(), day_end(date("2025-03-31")));
    }

    #[test]
    fn resolve_range_defaults_to_last_seven_days() {
        let (filter, start, end) = AnalyticsService::resolve_range(&StatsParams::default()).unwrap();
        assert!(filter.is_unfiltered());
        assert_eq!((end - start).num_days(), 6);
        assert_eq!(end, Utc::now().date_naive());
    }

    #[test]
    fn resolve_pagination_defaults_and_clamps() {
        let (skip, take) =
            AnalyticsService::resolve_pagination(&StatsParams::default()).unwrap();
        assert_eq!((skip, take), (0, 50));

        let params = StatsParams {
            skip: Some(20),
            take: Some(10_000),
            ..Default::default()
        };
        let (skip, take) = AnalyticsService::resolve_pagination(&params).unwrap();
        assert_eq!((skip, take), (20, 500));
    }

    #[test]
    fn resolve_pagination_rejects_zero_take() {
        let params = StatsParams {
            take: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            AnalyticsService::resolve_pagination(&params),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn range_where_clause_binds_in_order() {
        let filter = RangeFilter {
            from: Some(day_start(date("2025-05-01"))),
            to: Some(day_end(date("2025-05-02"))),
        };
        let (clause, values, next_index) = range_where_clause(&filter);
        assert_eq!(clause, "TRUE AND timestamp >= $1 AND timestamp <= $2");
        assert_eq!(values.len(), 2);
        assert_eq!(next_index, 3);
    }
}
