//! clubcms-core - Core types and query building for the club CMS client.
//!
//! Everything in this crate works without I/O: response envelopes, the
//! content-type records the CMS serves, media projections, validated
//! address/identifier newtypes, and the query descriptor with its
//! bracket-notation encoder. The `clubcms` crate adds the HTTP client and
//! the per-content-type services on top.

pub mod content;
pub mod envelope;
pub mod error;
pub mod format;
pub mod media;
pub mod query;
pub mod types;

// Re-export primary types at crate root for convenience
pub use content::{
    Activity, AgeColumn, AgeDivision, Album, Article, Contact, Document, EnrollmentStatus, Faq,
    Icon, PriceCondition, PriceEntry, PriceShift, SeasonDates, Settings, ShiftHours, TeamMember,
};
pub use envelope::{Envelope, ListEnvelope, ListMeta, Meta, Pagination};
pub use error::Error;
pub use format::format_phone;
pub use media::{Image, ImageFormat, ImageFormats, Photo, UploadFile};
pub use query::{PageRequest, Populate, Query, Relation};
pub use types::{CmsUrl, DocumentId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
