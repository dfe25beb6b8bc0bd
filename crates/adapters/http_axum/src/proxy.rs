//! Reverse proxy for the backend REST API.
//!
//! Requests are forwarded as-is and the backend's answer is returned
//! verbatim, whatever its status. Only connection-level headers are dropped
//! in both directions; the client recomputes framing for the new hop.

use axum::body;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Largest request body forwarded to the backend.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Headers that describe a single hop and must not be forwarded.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

/// `ANY /api/{*rest}`
///
/// # Errors
///
/// Returns [`ProxyError::Body`] when the request body cannot be read and
/// [`ProxyError::Upstream`] when the backend does not answer.
pub async fn forward(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = state.upstream_url(
        parts
            .uri
            .path_and_query()
            .map_or(parts.uri.path(), |path_and_query| path_and_query.as_str()),
    );
    let body = body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|err| ProxyError::Body(err.to_string()))?;

    tracing::debug!(method = %parts.method, %url, "forwarding to backend");
    let upstream = state
        .client()
        .request(parts.method, url.as_str())
        .headers(end_to_end(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = end_to_end(upstream.headers());
    let bytes = upstream.bytes().await?;
    Ok((status, headers, bytes).into_response())
}

/// Copy of `headers` without the hop-by-hop ones.
fn end_to_end(headers: &HeaderMap) -> HeaderMap {
    let mut kept = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !HOP_BY_HOP.contains(&name.as_str()) {
            kept.append(name.clone(), value.clone());
        }
    }
    kept
}
