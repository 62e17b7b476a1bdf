//! Error types for the admin console.
//!
//! Errors are split by where they originate: configuration, the authentication flow, and the
//! backend API itself. All of them collapse into [`Error`] so that API functions can use `?`
//! freely, and [`Error::to_ui_action`] tells a page what to do with a failure.

pub mod action;
pub mod auth;
pub mod config;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};

/// Main error type for the admin console.
///
/// # Error Categories
/// - Missing or expired credentials ([`AuthError`]), which send the user back to login
/// - Non-2xx backend responses, surfaced as a banner with the extracted message
/// - Malformed responses, kept distinct from transport failures
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Authentication error (missing token, refresh failure, expired session).
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },
    /// The backend answered 2xx but the body did not have the expected shape.
    #[error("Malformed response from server: {0}")]
    MalformedResponse(String),
    /// Transport failure (connection refused, DNS, TLS, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Failed to (de)serialize a JSON payload.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The request was superseded by a newer one and aborted.
    #[error("Request was superseded by a newer request")]
    Cancelled,
}
