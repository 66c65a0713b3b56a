//! Media asset types.
//!
//! Images come back in different projections depending on what the request
//! populated: a restricted [`Image`] for covers and portraits, a [`Photo`]
//! for gallery entries, and the full [`UploadFile`] record for file
//! attachments. The CMS only generates the derived formats a source image
//! is large enough for, so every entry in [`ImageFormats`] is optional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single derived image format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFormat {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// The derived formats generated for an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageFormats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<ImageFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<ImageFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<ImageFormat>,
}

impl ImageFormats {
    /// The smallest generated format, if any.
    pub fn smallest(&self) -> Option<&ImageFormat> {
        self.thumbnail
            .as_ref()
            .or(self.small.as_ref())
            .or(self.medium.as_ref())
            .or(self.large.as_ref())
    }

    /// The largest generated format, if any.
    pub fn largest(&self) -> Option<&ImageFormat> {
        self.large
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.small.as_ref())
            .or(self.thumbnail.as_ref())
    }
}

/// The restricted image projection populated for covers and portraits.
///
/// `url` is only present when the request's field list asked for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub formats: ImageFormats,
}

/// A gallery photo projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub width: u32,
    pub height: u32,
    pub url: String,
    #[serde(default)]
    pub formats: ImageFormats,
}

/// A full upload record, as attached to the settings enrollment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    pub id: i64,
    pub document_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formats: Option<ImageFormats>,
    pub hash: String,
    pub ext: String,
    pub mime: String,
    /// Size in kilobytes, as reported by the CMS.
    pub size: f64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}
