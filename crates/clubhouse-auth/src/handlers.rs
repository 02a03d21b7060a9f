use crate::auth_service::AuthError;
use crate::middleware::{SessionToken, SESSION_COOKIE_NAME};
use crate::types::{LoginRequest, LoginResponse, LogoutResponse, UserResponse};
use crate::{AuthState, RequireAuth};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Extension;
use axum::{extract::State, response::IntoResponse, Json, Router};
use clubhouse_core::error_builder::{internal_server_error, unauthorized};
use clubhouse_core::problemdetails::Problem;
use std::sync::Arc;
use tracing::error;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(login, logout, get_current_user),
    components(schemas(LoginRequest, LoginResponse, LogoutResponse, UserResponse)),
    tags(
        (name = "Authentication", description = "Password login and session management")
    )
)]
pub struct AuthApiDoc;

pub fn configure_routes() -> Router<Arc<AuthState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(get_current_user))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(auth_state): State<Arc<AuthState>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, Problem> {
    let token = match auth_state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(token) => token,
        Err(AuthError::AuthenticationError(msg)) => {
            return Err(unauthorized().detail(msg).build());
        }
        Err(e) => {
            error!("Login failed: {}", e);
            return Err(internal_server_error().build());
        }
    };

    // The login just succeeded, so the user must exist
    let user = auth_state
        .auth_service
        .verify_session(&token)
        .await
        .map_err(|e| {
            error!("Session verification after login failed: {}", e);
            internal_server_error().build()
        })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        format!(
            "{}={}; Max-Age=604800; Path=/; HttpOnly; Secure; SameSite=Strict",
            SESSION_COOKIE_NAME, token
        )
        .parse()
        .unwrap(),
    );

    let response = LoginResponse {
        token,
        user: UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.into(),
        },
    };

    Ok((headers, Json(response)))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Successfully logged out", body = LogoutResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("session_token" = [])),
    tag = "Authentication"
)]
pub async fn logout(
    State(auth_state): State<Arc<AuthState>>,
    RequireAuth(_auth): RequireAuth,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> Result<impl IntoResponse, Problem> {
    auth_state.auth_service.logout(&token).await.map_err(|e| {
        error!("Logout error: {}", e);
        internal_server_error().build()
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        format!(
            "{}=; Max-Age=0; Path=/; HttpOnly; Secure; SameSite=Strict",
            SESSION_COOKIE_NAME
        )
        .parse()
        .unwrap(),
    );

    Ok((
        headers,
        Json(LogoutResponse {
            status: "success".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Successfully retrieved user information", body = UserResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = [])),
    tag = "Authentication"
)]
pub async fn get_current_user(RequireAuth(auth): RequireAuth) -> impl IntoResponse {
    let user = auth.user;
    Json(UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role.into(),
    })
}
