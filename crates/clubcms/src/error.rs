//! Error types for the clubcms client.
//!
//! This module provides a unified error type with explicit variants for
//! transport failures, non-success statuses, body decoding, and input
//! validation. The client never recovers locally; every failure surfaces
//! to the caller.

use std::fmt;
use thiserror::Error;

/// The unified error type for CMS operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, connection, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The CMS answered with a non-success status.
    #[error("request failed: {0}")]
    Status(#[from] StatusError),

    /// The response body could not be decoded as the expected shape.
    #[error("response decoding failed: {message}")]
    Decode { message: String },

    /// Input validation errors (invalid base URL, endpoint, documentId).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] clubcms_core::Error),

    /// Configuration errors (missing or malformed environment values).
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode {
                message: err.to_string(),
            }
        } else if err.is_timeout() {
            Error::Transport(TransportError::Timeout {
                message: err.to_string(),
            })
        } else if err.is_connect() {
            Error::Transport(TransportError::Connection {
                message: err.to_string(),
            })
        } else {
            Error::Transport(TransportError::Http {
                message: err.to_string(),
            })
        }
    }
}

/// A non-success HTTP status from the CMS.
///
/// Carries the numeric status plus whatever the CMS's error envelope said
/// about itself, when the body was parseable.
#[derive(Debug)]
pub struct StatusError {
    /// HTTP status code.
    pub status: u16,
    /// CMS error name (e.g. `NotFoundError`), if present.
    pub code: Option<String>,
    /// Error message from the server, or the canonical status text.
    pub message: Option<String>,
}

impl StatusError {
    /// Create a new status error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// True if the record or endpoint does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for StatusError {}
