//! # sitedeck-app
//!
//! Application layer — the dashboard controller and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `HttpTransport` — send one request to the backend, return status + body
//!   - `Dialogs` — blocking alert and confirmation prompts
//! - Provide the typed [`client::ApiClient`] mapping every backend operation
//!   onto the transport
//! - Hold the whole UI state in a [`model::Model`] and change it only through
//!   [`update::update`], a pure function from [`message::Msg`] to
//!   [`effect::Effect`]s
//! - Execute effects with the [`runtime::Runtime`], feeding results back as
//!   messages
//!
//! ## Dependency rule
//! Depends on `sitedeck-domain` only. Never imports adapter crates or
//! browser APIs. Adapters depend on *this* crate, not the reverse.

pub mod client;
pub mod effect;
pub mod message;
pub mod model;
pub mod ports;
pub mod runtime;
pub mod update;

#[cfg(test)]
mod fake_backend;
