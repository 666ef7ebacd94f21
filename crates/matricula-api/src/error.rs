//! HTTP translation of the shared error taxonomy.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub error: String,
    /// Mirrors the HTTP status code.
    pub status: u16,
}

/// A core error on its way out as an HTTP response.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub matricula_core::Error);

impl ApiError {
    fn status(&self) -> StatusCode {
        use matricula_core::Error::*;
        match &self.0 {
            InvalidRecord { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DuplicateRegistration { .. } => StatusCode::CONFLICT,
            NotFound { .. } => StatusCode::NOT_FOUND,
            Persistence { .. } | Notification { .. } => StatusCode::BAD_GATEWAY,
            MalformedRecord { .. } | Config { .. } | Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }
        let body = ErrorBody {
            error: self.0.to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
