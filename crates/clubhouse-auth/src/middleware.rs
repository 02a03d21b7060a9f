use crate::{context::AuthContext, AuthState};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
};
use cookie::Cookie;
use std::sync::Arc;

/// Session cookie set on successful login
pub const SESSION_COOKIE_NAME: &str = "_clubhouse_session";

/// Raw session token of the authenticated request, used by logout
#[derive(Clone)]
pub struct SessionToken(pub String);

/// Resolves the caller's session (cookie or bearer token) and attaches an
/// `AuthContext` to the request extensions. Requests without a valid session
/// pass through untouched; the `RequireAuth` extractor rejects them later on
/// protected routes.
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut req: Request,
    next: Next,
) -> Result<axum::response::Response, StatusCode> {
    if let Some(token) = extract_session_token(&req) {
        match auth_state.auth_service.verify_session(&token).await {
            Ok(user) => {
                req.extensions_mut().insert(AuthContext::new_session(user));
                req.extensions_mut().insert(SessionToken(token));
            }
            Err(e) => {
                tracing::debug!("session verification failed: {}", e);
            }
        }
    }

    Ok(next.run(req).await)
}

fn extract_session_token(req: &Request) -> Option<String> {
    // 1. Authorization header takes precedence
    if let Some(auth_header) = req.headers().get("authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    // 2. Session cookie
    let cookie_header = req.headers().get("cookie")?.to_str().ok()?;
    for cookie in Cookie::split_parse(cookie_header).flatten() {
        if cookie.name() == SESSION_COOKIE_NAME {
            return Some(cookie.value().to_string());
        }
    }

    None
}
