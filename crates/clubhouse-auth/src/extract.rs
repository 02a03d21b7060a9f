use crate::context::AuthContext;
use axum::{extract::FromRequestParts, http::request::Parts};
use clubhouse_core::error_builder::unauthorized;
use clubhouse_core::problemdetails::Problem;

/// Extractor that requires an authenticated caller.
///
/// Reads the `AuthContext` the auth middleware attached to the request;
/// rejects with a 401 problem response when no valid session was presented.
pub struct RequireAuth(pub AuthContext);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(RequireAuth)
            .ok_or_else(|| unauthorized().build())
    }
}
