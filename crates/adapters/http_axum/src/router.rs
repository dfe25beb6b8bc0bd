//! Axum router assembly.

use axum::Router;
use axum::routing::{any, get};
use sitedeck_domain::endpoint::API_PREFIX;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `/health` answers directly, everything under `/api` goes to the backend
/// and any other path is served from the assets directory, with
/// `index.html` standing in for paths that are not files.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    let index = ServeFile::new(state.assets_dir().join("index.html"));
    let assets = ServeDir::new(state.assets_dir()).fallback(index);

    Router::new()
        .route("/health", get(health_check))
        .route(&format!("{API_PREFIX}/{{*rest}}"), any(crate::proxy::forward))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
