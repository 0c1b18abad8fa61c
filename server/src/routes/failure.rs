//! Failure responses for the API routes.
//!
//! Every failure leaving an `/api` handler is an envelope with a stable error
//! code; route modules map their service errors into [`ApiFailure`] so the
//! status and code stay in one place per error.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use records::{Envelope, error_code};

/// An HTTP status plus the failure envelope to serialize.
#[derive(Debug)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiFailure {
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self { status, code, message: message.into() }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, error_code::UNAUTHENTICATED, "authentication required")
    }

    /// Log the underlying database error and hide it behind a generic message.
    #[must_use]
    pub fn storage(err: &sqlx::Error) -> Self {
        tracing::error!(error = %err, "storage failure");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error_code::STORAGE_ERROR, "storage failure")
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::<()>::failure(self.code, self.message))).into_response()
    }
}

#[cfg(test)]
#[path = "failure_test.rs"]
mod tests;
