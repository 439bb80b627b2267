//! The shared library for Folio, a Rust-based portfolio single-page application.
//!
//! This library holds everything the frontend needs that is not a Yew view: the data
//! model shared with the portfolio backend, the HTTP client and typed service layer,
//! the state and workflows behind every form, logging setup and configuration.

pub mod api;
pub mod auth;
pub mod config;
pub mod contact;
pub mod dashboard;
pub mod data;
pub mod errors;
pub mod gallery;
pub mod id;
pub mod log;
pub mod macros;
pub mod service;
pub mod session;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;

pub use chrono;
pub use serde;
pub use serde_json;
pub use tracing;
