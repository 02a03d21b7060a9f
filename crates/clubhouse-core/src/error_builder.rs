use crate::problemdetails::{self, Problem};
use axum::http::StatusCode;
use serde::Serialize;

/// Fluent builder for RFC 7807 problem responses.
///
/// Fields that are never set are omitted from the response body; a
/// `timestamp` extension is stamped on every problem at build time.
pub struct ErrorBuilder {
    problem: Problem,
}

impl ErrorBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            problem: problemdetails::new(status),
        }
    }

    pub fn type_(mut self, value: impl Into<String>) -> Self {
        self.problem = self.problem.with_type(value.into());
        self
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.problem = self.problem.with_title(value.into());
        self
    }

    pub fn detail(mut self, value: impl Into<String>) -> Self {
        self.problem = self.problem.with_detail(value.into());
        self
    }

    pub fn instance(mut self, value: impl Into<String>) -> Self {
        self.problem = self.problem.with_instance(value.into());
        self
    }

    /// Attach an arbitrary extension value. Values that fail to serialize
    /// are dropped silently.
    pub fn value<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.problem = self.problem.with_value(key, value);
        }
        self
    }

    pub fn build(self) -> Problem {
        self.problem
            .with_value("timestamp", chrono::Utc::now().to_rfc3339())
    }
}

// Common error builders

pub fn internal_server_error() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::INTERNAL_SERVER_ERROR)
        .type_("https://clubhouse.dev/probs/internal-server-error")
        .title("Internal Server Error")
        .detail("An unexpected error occurred while processing your request")
        .instance("/error/internal-server-error")
        .value("error_code", "INTERNAL_SERVER_ERROR")
}

pub fn not_found() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::NOT_FOUND)
        .type_("https://clubhouse.dev/probs/not-found")
        .title("Resource Not Found")
        .instance("/error/not-found")
        .value("error_code", "NOT_FOUND")
}

pub fn unauthorized() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::UNAUTHORIZED)
        .type_("https://clubhouse.dev/probs/unauthorized")
        .title("Unauthorized")
        .detail("Authentication is required to access this resource")
        .instance("/error/unauthorized")
        .value("error_code", "UNAUTHORIZED")
}

pub fn bad_request() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::BAD_REQUEST)
        .type_("https://clubhouse.dev/probs/bad-request")
        .title("Bad Request")
        .detail("The request was malformed or invalid")
}

pub fn forbidden() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::FORBIDDEN)
        .type_("https://clubhouse.dev/probs/forbidden")
        .title("Forbidden")
        .detail("You do not have permission to access this resource")
        .instance("/error/forbidden")
        .value("error_code", "FORBIDDEN")
}

pub fn conflict() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::CONFLICT)
        .type_("https://clubhouse.dev/probs/conflict")
        .title("Conflict")
        .instance("/error/conflict")
        .detail("The request could not be completed due to a conflict with the current state of the resource")
        .value("error_code", "CONFLICT")
}

pub fn bad_gateway() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::BAD_GATEWAY)
        .type_("https://clubhouse.dev/probs/bad-gateway")
        .title("Bad Gateway")
        .detail("An upstream service failed while processing your request")
        .instance("/error/bad-gateway")
        .value("error_code", "BAD_GATEWAY")
}
