use super::{map_error, AppState};
use crate::services::{BlogPage, BlogResponse, CreateBlogRequest, UpdateBlogRequest};
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
        .route("/blogs", get(list_published_blogs))
        .route("/blogs", post(create_blog))
        .route("/blogs/all", get(list_all_blogs))
        .route("/blogs/slug/{slug}", get(get_blog_by_slug))
        .route("/blogs/{id}", get(get_blog))
        .route("/blogs/{id}", put(update_blog))
        .route("/blogs/{id}", delete(delete_blog))
}

/// List published blog posts, newest first
#[utoipa::path(
    tag = "Content",
    get,
    path = "/blogs",
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("page_size" = Option<u64>, Query, description = "Page size (default 20, max 100)")
    ),
    responses(
        (status = 200, description = "Published blog posts", body = BlogPage),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_published_blogs(
    State(app_state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, Problem> {
    let (page, page_size) = pagination.normalize();
    app_state
        .blog_service
        .list_blogs(page, page_size, true)
        .await
        .map(Json)
        .map_err(map_error)
}

/// List all blog posts including drafts (admin)
#[utoipa::path(
    tag = "Content",
    get,
    path = "/blogs/all",
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("page_size" = Option<u64>, Query, description = "Page size (default 20, max 100)")
    ),
    responses(
        (status = 200, description = "All blog posts", body = BlogPage),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller lacks the content permission")
    ),
    security(("session_token" = []))
)]
pub async fn list_all_blogs(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    let (page, page_size) = pagination.normalize();
    app_state
        .blog_service
        .list_blogs(page, page_size, false)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Fetch a published blog post by its slug
#[utoipa::path(
    tag = "Content",
    get,
    path = "/blogs/slug/{slug}",
    params(("slug" = String, Path, description = "Blog slug")),
    responses(
        (status = 200, description = "Blog post", body = BlogResponse),
        (status = 404, description = "No published post with this slug")
    )
)]
pub async fn get_blog_by_slug(
    State(app_state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Problem> {
    app_state
        .blog_service
        .get_published_blog_by_slug(&slug)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Fetch a blog post by id, drafts included (admin)
#[utoipa::path(
    tag = "Content",
    get,
    path = "/blogs/{id}",
    params(("id" = i32, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog post", body = BlogResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Blog not found")
    ),
    security(("session_token" = []))
)]
pub async fn get_blog(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .blog_service
        .get_blog(id)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Create a blog post (admin)
#[utoipa::path(
    tag = "Content",
    post,
    path = "/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 200, description = "Created blog post", body = BlogResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller lacks the content permission")
    ),
    security(("session_token" = []))
)]
pub async fn create_blog(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<CreateBlogRequest>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .blog_service
        .create_blog(request)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Update a blog post (admin)
#[utoipa::path(
    tag = "Content",
    put,
    path = "/blogs/{id}",
    params(("id" = i32, Path, description = "Blog id")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Updated blog post", body = BlogResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Blog not found")
    ),
    security(("session_token" = []))
)]
pub async fn update_blog(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBlogRequest>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .blog_service
        .update_blog(id, request)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Delete a blog post (admin)
#[utoipa::path(
    tag = "Content",
    delete,
    path = "/blogs/{id}",
    params(("id" = i32, Path, description = "Blog id")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Blog not found")
    ),
    security(("session_token" = []))
)]
pub async fn delete_blog(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .blog_service
        .delete_blog(id)
        .await
        .map(|_| axum::http::StatusCode::NO_CONTENT)
        .map_err(map_error)
}
