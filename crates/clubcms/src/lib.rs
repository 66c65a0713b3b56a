//! clubcms - Typed read client for the club website's CMS.
//!
//! The site's content lives in a headless Strapi instance; this crate is
//! the data-access layer the page-rendering build reads it through. A
//! generic [`CmsClient`] performs typed GETs against the content API, and
//! one service per content type pins down the exact endpoint, sort order,
//! and population rules of each request.
//!
//! # Example
//!
//! ```no_run
//! use clubcms::{CmsClient, CmsConfig, CmsUrl, NewsService, PageRequest};
//!
//! # async fn example() -> Result<(), clubcms::Error> {
//! let base = CmsUrl::new("https://cms.club.example")?;
//! let client = CmsClient::new(CmsConfig::new(base));
//!
//! let news = NewsService::new(client.clone());
//! let page = news.list(PageRequest::default()).await?;
//! for article in &page {
//!     println!("{}", article.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! All operations are independent, stateless reads; failures propagate to
//! the caller as [`Error`] values and are never retried here.

pub mod client;
pub mod config;
pub mod error;
pub mod services;

// Re-export primary types at crate root for convenience
pub use client::CmsClient;
pub use config::CmsConfig;
pub use error::{Error, StatusError, TransportError};
#[allow(deprecated)]
pub use services::EnrollmentService;
pub use services::{
    ActivitiesService, ContactService, DivisionsService, FaqsService, GalleriesService,
    NewsService, PricesService, SeasonService, SettingsService, TeamService,
};

// Core types, re-exported so consumers depend on one crate
pub use clubcms_core::{
    Activity, AgeColumn, AgeDivision, Album, Article, CmsUrl, Contact, Document, DocumentId,
    EnrollmentStatus, Envelope, Faq, Icon, Image, ImageFormat, ImageFormats, ListEnvelope,
    ListMeta, Meta, PageRequest, Pagination, Photo, Populate, PriceCondition, PriceEntry,
    PriceShift, Query, Relation, SeasonDates, Settings, ShiftHours, TeamMember, UploadFile,
    format_phone,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
