//! Transport port — one HTTP round trip to the backend.

use std::future::Future;

use sitedeck_domain::endpoint::{Endpoint, Method};
use sitedeck_domain::session::Token;

/// A request ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Origin-relative path, e.g. `/api/sites/3`.
    pub path: String,
    /// Full `Authorization` header value, if any.
    pub authorization: Option<String>,
    /// JSON body; sent with `Content-Type: application/json`.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Request for `endpoint` with no auth and no body.
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            method: endpoint.method(),
            path: endpoint.path(),
            authorization: None,
            body: None,
        }
    }

    #[must_use]
    pub fn bearer(mut self, token: &Token) -> Self {
        self.authorization = Some(token.bearer_header());
        self
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status and raw body of a completed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (network failure, CORS, abort).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request failed: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sends requests to the backend.
///
/// Implementations must not interpret the status code: every response that
/// arrives is returned as `Ok`.
pub trait HttpTransport {
    /// Perform one round trip.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> {
        (**self).send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedeck_domain::id::CommandId;

    #[test]
    fn should_build_request_from_endpoint() {
        let request = HttpRequest::new(Endpoint::StartCommand(CommandId::new(5)))
            .bearer(&Token::new("abc"));
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/commands/5/start");
        assert_eq!(request.authorization.as_deref(), Some("Bearer abc"));
        assert!(request.body.is_none());
    }

    #[test]
    fn should_treat_2xx_as_success() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let bad = HttpResponse {
            status: 400,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
