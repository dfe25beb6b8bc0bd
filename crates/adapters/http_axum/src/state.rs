//! Shared application state for axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// State shared across all handlers.
///
/// Cheap to clone: the HTTP client is reference counted internally and the
/// remaining fields sit behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    client: reqwest::Client,
    upstream: Arc<str>,
    assets_dir: Arc<Path>,
}

impl AppState {
    /// Create the state for an upstream base URL (e.g. `http://127.0.0.1:8000`)
    /// and the directory holding the built dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(
        upstream: impl AsRef<str>,
        assets_dir: impl Into<PathBuf>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            // Redirects are the browser's business.
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            upstream: Arc::from(upstream.as_ref().trim_end_matches('/')),
            assets_dir: Arc::from(assets_dir.into()),
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Upstream base URL without a trailing slash.
    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Absolute upstream URL for an origin-relative `path_and_query`.
    #[must_use]
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.upstream)
    }
}
