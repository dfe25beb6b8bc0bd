//! # sitedeck-domain
//!
//! Pure domain model for the sitedeck process dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, validation errors
//! - Define **Sites** (a filesystem location with a base shell command)
//! - Define **Commands** (shell-command templates scoped to a site, with env overrides)
//! - Define **Sessions** (bearer token, permissions, login payloads)
//! - Define **Log snapshots** returned by the backend
//! - Describe the backend's REST surface as a typed [`endpoint::Endpoint`] table
//! - Encode and decode the `key=value` env text used by the command editor
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod command;
pub mod endpoint;
pub mod env;
pub mod log;
pub mod session;
pub mod site;
