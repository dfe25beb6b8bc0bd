//! [`HttpTransport`] over the browser `fetch` API via `gloo-net`.

use gloo_net::http::{Method as FetchMethod, RequestBuilder};
use sitedeck_app::ports::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use sitedeck_domain::endpoint::Method;

/// Sends requests to the page's own origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = RequestBuilder::new(&request.path).method(fetch_method(request.method));
        if let Some(authorization) = &request.authorization {
            builder = builder.header("Authorization", authorization);
        }

        let response = match &request.body {
            Some(body) => builder.json(body).map_err(transport_error)?.send().await,
            None => builder.send().await,
        }
        .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        Ok(HttpResponse { status, body })
    }
}

fn fetch_method(method: Method) -> FetchMethod {
    match method {
        Method::Get => FetchMethod::GET,
        Method::Post => FetchMethod::POST,
        Method::Put => FetchMethod::PUT,
        Method::Delete => FetchMethod::DELETE,
    }
}

fn transport_error(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}
