use super::{map_error, AppState};
use crate::services::{
    CreateSyllabusEntryRequest, SyllabusEntryResponse, SyllabusPage, UpdateSyllabusEntryRequest,
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
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/syllabus", get(list_syllabus_entries))
        .route("/syllabus", post(create_syllabus_entry))
        .route("/syllabus/{id}", get(get_syllabus_entry))
        .route("/syllabus/{id}", put(update_syllabus_entry))
        .route("/syllabus/{id}", delete(delete_syllabus_entry))
}

#[derive(Debug, Deserialize)]
pub struct SyllabusListQuery {
    pub semester: Option<i32>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// List syllabus entries, ordered by semester then subject
#[utoipa::path(
    tag = "Content",
    get,
    path = "/syllabus",
    params(
        ("semester" = Option<i32>, Query, description = "Filter by semester"),
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("page_size" = Option<u64>, Query, description = "Page size (default 20, max 100)")
    ),
    responses((status = 200, description = "Syllabus entries", body = SyllabusPage))
)]
pub async fn list_syllabus_entries(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<SyllabusListQuery>,
) -> Result<impl IntoResponse, Problem> {
    let (page, page_size) = PaginationParams {
        page: query.page,
        page_size: query.page_size,
    }
    .normalize();
    app_state
        .syllabus_service
        .list_entries(query.semester, page, page_size)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Fetch a syllabus entry
#[utoipa::path(
    tag = "Content",
    get,
    path = "/syllabus/{id}",
    params(("id" = i32, Path, description = "Syllabus entry id")),
    responses(
        (status = 200, description = "Syllabus entry", body = SyllabusEntryResponse),
        (status = 404, description = "Syllabus entry not found")
    )
)]
pub async fn get_syllabus_entry(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    app_state
        .syllabus_service
        .get_entry(id)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Create a syllabus entry (admin)
#[utoipa::path(
    tag = "Content",
    post,
    path = "/syllabus",
    request_body = CreateSyllabusEntryRequest,
    responses(
        (status = 200, description = "Created syllabus entry", body = SyllabusEntryResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(("session_token" = []))
)]
pub async fn create_syllabus_entry(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<CreateSyllabusEntryRequest>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .syllabus_service
        .create_entry(request)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Update a syllabus entry (admin)
#[utoipa::path(
    tag = "Content",
    put,
    path = "/syllabus/{id}",
    params(("id" = i32, Path, description = "Syllabus entry id")),
    request_body = UpdateSyllabusEntryRequest,
    responses(
        (status = 200, description = "Updated syllabus entry", body = SyllabusEntryResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Syllabus entry not found")
    ),
    security(("session_token" = []))
)]
pub async fn update_syllabus_entry(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateSyllabusEntryRequest>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .syllabus_service
        .update_entry(id, request)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Delete a syllabus entry (admin)
#[utoipa::path(
    tag = "Content",
    delete,
    path = "/syllabus/{id}",
    params(("id" = i32, Path, description = "Syllabus entry id")),
    responses(
        (status = 204, description = "Syllabus entry deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Syllabus entry not found")
    ),
    security(("session_token" = []))
)]
pub async fn delete_syllabus_entry(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .syllabus_service
        .delete_entry(id)
        .await
        .map(|_| axum::http::StatusCode::NO_CONTENT)
        .map_err(map_error)
}
