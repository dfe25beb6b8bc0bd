//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error body, shaped like the backend's own errors so the dashboard
/// handles both the same way.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Failure while forwarding a request to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The incoming request body could not be read.
    #[error("failed to read request body: {0}")]
    Body(String),

    /// The backend could not be reached or its response was cut short.
    #[error("backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(err) => {
                tracing::warn!(error = %err, "backend request failed");
                StatusCode::BAD_GATEWAY
            }
        };

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
