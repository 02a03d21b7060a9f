use super::{map_error, AppState};
use crate::services::{
    CreateLabManualRequest, CreateQuestionPaperRequest, CreateTextbookRequest, LabManualPage,
    LabManualResponse, LibraryFilter, QuestionPaperPage, QuestionPaperResponse, TextbookPage,
    TextbookResponse,
};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use clubhouse_auth::{permission_guard, RequireAuth};
use clubhouse_core::config::PaginationParams;
use clubhouse_core::problemdetails::Problem;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lab-manuals", get(list_lab_manuals))
        .route("/lab-manuals", post(create_lab_manual))
        .route("/lab-manuals/{id}", get(get_lab_manual))
        .route("/lab-manuals/{id}", delete(delete_lab_manual))
        .route("/question-papers", get(list_question_papers))
        .route("/question-papers", post(create_question_paper))
        .route("/question-papers/{id}", get(get_question_paper))
        .route("/question-papers/{id}", delete(delete_question_paper))
        .route("/textbooks", get(list_textbooks))
        .route("/textbooks", post(create_textbook))
        .route("/textbooks/{id}", get(get_textbook))
        .route("/textbooks/{id}", delete(delete_textbook))
}

/// Combined list query: subject/semester filter plus pagination
#[derive(Debug, Deserialize)]
pub struct LibraryListQuery {
    pub subject: Option<String>,
    pub semester: Option<i32>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl LibraryListQuery {
    fn split(self) -> (LibraryFilter, u64, u64) {
        let (page, page_size) = PaginationParams {
            page: self.page,
            page_size: self.page_size,
        }
        .normalize();
        (
            LibraryFilter {
                subject: self.subject,
                semester: self.semester,
            },
            page,
            page_size,
        )
    }
}

// ---------------------------------------------------------------------------
// Lab manuals
// ---------------------------------------------------------------------------

/// List lab manuals, optionally filtered by subject and semester
#[utoipa::path(
    tag = "Content",
    get,
    path = "/lab-manuals",
    params(
        ("subject" = Option<String>, Query, description = "Filter by subject"),
        ("semester" = Option<i32>, Query, description = "Filter by semester"),
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("page_size" = Option<u64>, Query, description = "Page size (default 20, max 100)")
    ),
    responses((status = 200, description = "Lab manuals", body = LabManualPage))
)]
pub async fn list_lab_manuals(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<LibraryListQuery>,
) -> Result<impl IntoResponse, Problem> {
    let (filter, page, page_size) = query.split();
    app_state
        .library_service
        .list_lab_manuals(filter, page, page_size)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Fetch a lab manual
#[utoipa::path(
    tag = "Content",
    get,
    path = "/lab-manuals/{id}",
    params(("id" = i32, Path, description = "Lab manual id")),
    responses(
        (status = 200, description = "Lab manual", body = LabManualResponse),
        (status = 404, description = "Lab manual not found")
    )
)]
pub async fn get_lab_manual(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    app_state
        .library_service
        .get_lab_manual(id)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Upload a lab manual (admin)
#[utoipa::path(
    tag = "Content",
    post,
    path = "/lab-manuals",
    request_body = CreateLabManualRequest,
    responses(
        (status = 200, description = "Created lab manual", body = LabManualResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(("session_token" = []))
)]
pub async fn create_lab_manual(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<CreateLabManualRequest>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .library_service
        .create_lab_manual(request)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Delete a lab manual (admin)
#[utoipa::path(
    tag = "Content",
    delete,
    path = "/lab-manuals/{id}",
    params(("id" = i32, Path, description = "Lab manual id")),
    responses(
        (status = 204, description = "Lab manual deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Lab manual not found")
    ),
    security(("session_token" = []))
)]
pub async fn delete_lab_manual(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .library_service
        .delete_lab_manual(id)
        .await
        .map(|_| axum::http::StatusCode::NO_CONTENT)
        .map_err(map_error)
}

// ---------------------------------------------------------------------------
// Question papers
// ---------------------------------------------------------------------------

/// List question papers, optionally filtered by subject and semester
#[utoipa::path(
    tag = "Content",
    get,
    path = "/question-papers",
    params(
        ("subject" = Option<String>, Query, description = "Filter by subject"),
        ("semester" = Option<i32>, Query, description = "Filter by semester"),
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("page_size" = Option<u64>, Query, description = "Page size (default 20, max 100)")
    ),
    responses((status = 200, description = "Question papers", body = QuestionPaperPage))
)]
pub async fn list_question_papers(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<LibraryListQuery>,
) -> Result<impl IntoResponse, Problem> {
    let (filter, page, page_size) = query.split();
    app_state
        .library_service
        .list_question_papers(filter, page, page_size)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Fetch a question paper
#[utoipa::path(
    tag = "Content",
    get,
    path = "/question-papers/{id}",
    params(("id" = i32, Path, description = "Question paper id")),
    responses(
        (status = 200, description = "Question paper", body = QuestionPaperResponse),
        (status = 404, description = "Question paper not found")
    )
)]
pub async fn get_question_paper(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    app_state
        .library_service
        .get_question_paper(id)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Upload a question paper (admin)
#[utoipa::path(
    tag = "Content",
    post,
    path = "/question-papers",
    request_body = CreateQuestionPaperRequest,
    responses(
        (status = 200, description = "Created question paper", body = QuestionPaperResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(("session_token" = []))
)]
pub async fn create_question_paper(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<CreateQuestionPaperRequest>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .library_service
        .create_question_paper(request)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Delete a question paper (admin)
#[utoipa::path(
    tag = "Content",
    delete,
    path = "/question-papers/{id}",
    params(("id" = i32, Path, description = "Question paper id")),
    responses(
        (status = 204, description = "Question paper deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Question paper not found")
    ),
    security(("session_token" = []))
)]
pub async fn delete_question_paper(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .library_service
        .delete_question_paper(id)
        .await
        .map(|_| axum::http::StatusCode::NO_CONTENT)
        .map_err(map_error)
}

// ---------------------------------------------------------------------------
// Textbooks
// ---------------------------------------------------------------------------

/// List textbooks, optionally filtered by subject
#[utoipa::path(
    tag = "Content",
    get,
    path = "/textbooks",
    params(
        ("subject" = Option<String>, Query, description = "Filter by subject"),
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("page_size" = Option<u64>, Query, description = "Page size (default 20, max 100)")
    ),
    responses((status = 200, description = "Textbooks", body = TextbookPage))
)]
pub async fn list_textbooks(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<LibraryListQuery>,
) -> Result<impl IntoResponse, Problem> {
    let (filter, page, page_size) = query.split();
    app_state
        .library_service
        .list_textbooks(filter, page, page_size)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Fetch a textbook
#[utoipa::path(
    tag = "Content",
    get,
    path = "/textbooks/{id}",
    params(("id" = i32, Path, description = "Textbook id")),
    responses(
        (status = 200, description = "Textbook", body = TextbookResponse),
        (status = 404, description = "Textbook not found")
    )
)]
pub async fn get_textbook(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    app_state
        .library_service
        .get_textbook(id)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Add a textbook (admin)
#[utoipa::path(
    tag = "Content",
    post,
    path = "/textbooks",
    request_body = CreateTextbookRequest,
    responses(
        (status = 200, description = "Created textbook", body = TextbookResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(("session_token" = []))
)]
pub async fn create_textbook(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<CreateTextbookRequest>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .library_service
        .create_textbook(request)
        .await
        .map(Json)
        .map_err(map_error)
}

/// Delete a textbook (admin)
#[utoipa::path(
    tag = "Content",
    delete,
    path = "/textbooks/{id}",
    params(("id" = i32, Path, description = "Textbook id")),
    responses(
        (status = 204, description = "Textbook deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Textbook not found")
    ),
    security(("session_token" = []))
)]
pub async fn delete_textbook(
    RequireAuth(auth): RequireAuth,
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Problem> {
    permission_guard!(auth, ContentWrite);
    app_state
        .library_service
        .delete_textbook(id)
        .await
        .map(|_| axum::http::StatusCode::NO_CONTENT)
        .map_err(map_error)
}
