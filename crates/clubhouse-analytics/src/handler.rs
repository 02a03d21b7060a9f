use crate::types::requests::{PageViewStatsQuery, RecordPageViewRequest, StatsParams};
use crate::types::responses::{DailyViewCount, PageViewEventResponse, PageViewStats, PathViewCount};
use crate::{Analytics, AnalyticsError};
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use clubhouse_auth::{permission_guard, RequireAuth};
use clubhouse_core::error_builder::{bad_request, internal_server_error};
use clubhouse_core::problemdetails::{Problem, ProblemDetails};
use std::sync::Arc;
use tracing::error;
use utoipa::OpenApi;

pub struct AppState {
    pub analytics_service: Arc<dyn Analytics>,
}

#[derive(OpenApi)]
#[openapi(
    paths(record_page_view, get_page_view_stats),
    components(schemas(
        RecordPageViewRequest,
        PageViewEventResponse,
        PageViewStats,
        DailyViewCount,
        PathViewCount,
        PageViewStatsQuery,
        ProblemDetails,
    )),
    tags(
        (name = "Analytics", description = "Page view tracking and aggregated statistics")
    )
)]
pub struct AnalyticsApiDoc;

pub fn configure_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/track/page-view", post(record_page_view))
        .route("/analytics/page-views", get(get_page_view_stats))
}

/// Record one page view.
///
/// Called by every public page on render. Tracking is best-effort: callers
/// must not block page rendering when this fails.
#[utoipa::path(
    tag = "Analytics",
    post,
    path = "/track/page-view",
    request_body = RecordPageViewRequest,
    responses(
        (status = 200, description = "Event recorded", body = PageViewEventResponse),
        (status = 400, description = "Empty or whitespace-only path", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    )
)]
pub async fn record_page_view(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<RecordPageViewRequest>,
) -> Result<impl IntoResponse, Problem> {
    let user_agent = request.user_agent.clone().or_else(|| {
        headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
    });

    match app_state
        .analytics_service
        .record_page_view(&request.path, request.session_id.clone(), user_agent)
        .await
    {
        Ok(event) => Ok(Json(PageViewEventResponse {
            id: event.id,
            path: event.path,
            session_id: event.session_id,
            timestamp: event.timestamp,
        })),
        Err(AnalyticsError::InvalidInput(msg)) => Err(bad_request().detail(msg).build()),
        Err(e) => {
            // Tracking loss must never break the page; the client is told
            // to ignore this response.
            error!("Failed to record page view: {}", e);
            Err(internal_server_error().build())
        }
    }
}

/// Aggregated page view statistics for the admin analytics view
#[utoipa::path(
    tag = "Analytics",
    get,
    path = "/analytics/page-views",
    params(
        ("start_date" = Option<String>, Query, description = "Start date in format YYYY-MM-DD"),
        ("end_date" = Option<String>, Query, description = "End date in format YYYY-MM-DD"),
        ("skip" = Option<u64>, Query, description = "Rows to skip in the per-path breakdown"),
        ("take" = Option<u64>, Query, description = "Per-path page size (default 50, max 500)")
    ),
    responses(
        (status = 200, description = "Successfully computed statistics", body = PageViewStats),
        (status = 400, description = "Invalid date, inverted range, range over 90 days, or take out of bounds", body = ProblemDetails),
        (status = 401, description = "Unauthorized", body = ProblemDetails),
        (status = 403, description = "Caller lacks the analytics permission", body = ProblemDetails),
        (status = 500, description = "Internal server error", body = ProblemDetails)
    ),
    security(("session_token" = []))
)]
pub async fn get_page_view_stats(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<PageViewStatsQuery>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, AnalyticsRead);

    let params = StatsParams {
        start_date: parse_date(query.start_date.as_deref(), "start_date")?,
        end_date: parse_date(query.end_date.as_deref(), "end_date")?,
        skip: query.skip,
        take: query.take,
    };

    match app_state.analytics_service.get_page_view_stats(params).await {
        Ok(stats) => Ok(Json(stats)),
        Err(e) => Err(handle_analytics_error(e)),
    }
}

fn parse_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, Problem> {
    value
        .map(|s| {
            s.parse::<NaiveDate>().map_err(|_| {
                bad_request()
                    .detail(format!("{} must be a date in format YYYY-MM-DD", field))
                    .value("field", field)
                    .build()
            })
        })
        .transpose()
}

fn handle_analytics_error(error: AnalyticsError) -> Problem {
    match error {
        AnalyticsError::InvalidInput(msg) => bad_request().detail(msg).build(),
        AnalyticsError::InvalidRange => bad_request()
            .detail("Start date must not be after end date")
            .build(),
        AnalyticsError::RangeTooLarge(days) => bad_request()
            .detail(format!("Date range must not span more than {} days", days))
            .build(),
        AnalyticsError::Database(e) => {
            error!("Analytics query failed: {}", e);
            internal_server_error().build()
        }
    }
}
