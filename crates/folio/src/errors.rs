//! Shared error types and utilities for the folio project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

pub use crate::api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures of the admin login and register forms.
///
/// The first two variants are checked before any request leaves the browser.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Only authorized email can access the admin dashboard")]
    EmailNotAllowed,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Login response did not include a token")]
    MissingToken,
    #[error(transparent)]
    Api(#[from] ApiError),
}
