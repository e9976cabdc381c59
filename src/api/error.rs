//! HTTP error mapping
//!
//! Wraps [`HelpdeskError`] so handler failures become the uniform
//! `{"success": false, "error": ...}` envelope: validation errors map to
//! 400, missing tickets to 404, everything else to 500. Nothing escapes to
//! the transport layer uncaught.

use crate::error::HelpdeskError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Handler-level error wrapper
#[derive(Debug)]
pub struct ApiError(HelpdeskError);

/// Convenience alias for handler return values
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<HelpdeskError> for ApiError {
    fn from(error: HelpdeskError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            HelpdeskError::UnsupportedIssue { .. }
            | HelpdeskError::InvalidUpdateField { .. }
            | HelpdeskError::MissingRequiredField(_) => StatusCode::BAD_REQUEST,
            HelpdeskError::TicketNotFound { .. } => StatusCode::NOT_FOUND,
            error => {
                tracing::error!(%error, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            },
        };

        let body = json!({
            "success": false,
            "error": self.0.user_message(),
        });
        (status, Json(body)).into_response()
    }
}
