//! Error envelope for the HTTP surface.
//!
//! Failed requests serialize as `{ "error": { "code": "...", "message":
//! "..." } }`. Engine errors convert via `From` so handlers can use `?`;
//! the conversions log the full error and report a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::conjunction::ConjunctionError;
use crate::propagation::PropagationError;

/// Error detail inside the envelope.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// An API failure carrying its HTTP status. Returned from handlers as the
/// `Err` arm and rendered by [`IntoResponse`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn build(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::build(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::build(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::build(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code.to_string(),
                message: self.message,
            },
        };
        (self.status, axum::Json(body)).into_response()
    }
}

impl From<PropagationError> for ApiError {
    fn from(err: PropagationError) -> Self {
        error!(error = %err, "Propagation failed while serving a request");
        Self::internal("SGP4 propagation error")
    }
}

impl From<ConjunctionError> for ApiError {
    fn from(err: ConjunctionError) -> Self {
        error!(error = %err, "Conjunction sweep failed");
        Self::internal(err.to_string())
    }
}
