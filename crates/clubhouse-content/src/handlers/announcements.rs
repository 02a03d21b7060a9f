use super::{map_error, AppState};
use crate::services::{
    AnnouncementPage, AnnouncementResponse, CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use clubhouse_auth::{permission_guard, RequireAuth};
use clubhouse_core::config::PaginationParams;
use clubhouse_core::problemdetails::Problem;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/announcements", get(list_announcements))
        .route("/announcements", post(create_announcement))
        .route("/announcements/{id}", get(get_announcement))
        .route("/announcements/{id}", put(update_announcement))
        .route("/announcements/{id}", delete(delete_announcement))
}

/// List announcements; pinned entries sort first
#[utoipa::path(
    tag = "Content",
    get,
    path = "/announcements",
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("page_size" = Option<u64>, Query, description = "Page size (default 20, max 100)")
    ),
    responses((status = 200, description = "Announcements", body = AnnouncementPage))
)]
pub async fn list_announcements(
    State(app_state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, Problem> {
    let (page, page_size) = pagination.normalize();
    app_state
        .announcement_service
        .list_announcements(page, page_size)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Fetch an announcement
#[utoipa::path(
    tag = "Content",
    get,
    path = "/announcements/{id}",
    params(("id" = i32, Path, description = "Announcement id")),
    responses(
        (status = 200, description = "Announcement", body = AnnouncementResponse),
        (status = 404, description = "Announcement not found")
    )
)]
pub async fn get_announcement(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    app_state
        .announcement_service
        .get_announcement(id)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Create an announcement (admin)
#[utoipa::path(
    tag = "Content",
    post,
    path = "/announcements",
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 200, description = "Created announcement", body = AnnouncementResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(("session_token" = []))
)]
pub async fn create_announcement(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .announcement_service
        .create_announcement(request)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Update an announcement (admin)
#[utoipa::path(
    tag = "Content",
    put,
    path = "/announcements/{id}",
    params(("id" = i32, Path, description = "Announcement id")),
    request_body = UpdateAnnouncementRequest,
    responses(
        (status = 200, description = "Updated announcement", body = AnnouncementResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Announcement not found")
    ),
    security(("session_token" = []))
)]
pub async fn update_announcement(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateAnnouncementRequest>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .announcement_service
        .update_announcement(id, request)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Delete an announcement (admin)
#[utoipa::path(
    tag = "Content",
    delete,
    path = "/announcements/{id}",
    params(("id" = i32, Path, description = "Announcement id")),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Announcement not found")
    ),
    security(("session_token" = []))
)]
pub async fn delete_announcement(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .announcement_service
        .delete_announcement(id)
        .await
        .map(|_| axum::http::StatusCode::NO_CONTENT)
        .map_err(map_error)
}
