//! # sitedeck-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled **dashboard** (wasm bundle, `index.html`, static
//!   assets) from a directory, falling back to `index.html` for any path that
//!   is not a file so the single-page app owns client-side navigation
//! - Forward every `/api/*` request to the **backend** unchanged (method,
//!   path, query, headers, body) so the dashboard and the API share an origin
//! - Answer `/health` for liveness probes
//!
//! ## Dependency rule
//! Depends on `sitedeck-domain` for the API prefix only. The backend is an
//! external collaborator: this crate never decodes the bodies it forwards.

pub mod error;
pub mod proxy;
pub mod router;
pub mod state;
