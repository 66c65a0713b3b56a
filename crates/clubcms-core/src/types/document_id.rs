//! Document identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A validated CMS document identifier.
///
/// The CMS assigns every content record a stable `documentId` that survives
/// draft/publish cycles, distinct from the numeric database id. Validating
/// the format here keeps caller-supplied ids from smuggling extra path
/// segments into a request URL.
///
/// # Example
///
/// ```
/// use clubcms_core::DocumentId;
///
/// let id = DocumentId::new("znp9tp2jo4l0b3chp2pxistq").unwrap();
/// assert_eq!(id.as_str(), "znp9tp2jo4l0b3chp2pxistq");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a new document id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, longer than 64 characters,
    /// or contains anything other than ASCII letters and digits.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the document id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(Error::DocumentId {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            });
        }

        if s.len() > 64 {
            return Err(Error::DocumentId {
                value: s.to_string(),
                reason: "exceeds maximum length of 64 characters".to_string(),
            });
        }

        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::DocumentId {
                value: s.to_string(),
                reason: "may only contain ASCII letters and digits".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
