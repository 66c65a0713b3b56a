//! Input-side error types for the core crate.

use thiserror::Error;

/// Errors produced while validating inputs or building requests.
///
/// Network and response errors live in the client crate; everything here
/// can occur before a single byte goes over the wire.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid CMS base address.
    #[error("invalid CMS URL '{value}': {reason}")]
    CmsUrl { value: String, reason: String },

    /// Invalid document identifier.
    #[error("invalid documentId '{value}': {reason}")]
    DocumentId { value: String, reason: String },

    /// Endpoint path outside the CMS API root.
    #[error("invalid endpoint '{value}': {reason}")]
    Endpoint { value: String, reason: String },

    /// Query descriptor could not be serialized.
    #[error("query serialization failed: {message}")]
    Query { message: String },
}
