//! CMS base address type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::Error;

/// A validated CMS base address.
///
/// This type ensures the address is absolute, uses HTTPS (or HTTP for
/// localhost), and is normalized so endpoint paths can be appended to it.
///
/// # Example
///
/// ```
/// use clubcms_core::CmsUrl;
///
/// let base = CmsUrl::new("https://cms.club.example").unwrap();
/// assert_eq!(base.join("/api/noticias").unwrap(),
///            "https://cms.club.example/api/noticias");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CmsUrl(Url);

impl CmsUrl {
    /// Create a new CMS URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| Error::CmsUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Build the absolute URL for an API endpoint path.
    ///
    /// Endpoints are rooted under `/api/`, the prefix the CMS serves its
    /// content API from; anything else is rejected before a request is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint does not start with `/api/`.
    pub fn join(&self, endpoint: &str) -> Result<String, Error> {
        if !endpoint.starts_with("/api/") || endpoint.len() == "/api/".len() {
            return Err(Error::Endpoint {
                value: endpoint.to_string(),
                reason: "must be a path under /api/".to_string(),
            });
        }

        // The URL crate always adds a trailing slash to root paths,
        // so trim it when concatenating the endpoint
        let base = self.0.as_str().trim_end_matches('/');
        Ok(format!("{}{}", base, endpoint))
    }

    /// Returns the base address as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(Error::CmsUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            });
        }

        // Must be HTTPS (or HTTP for localhost)
        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(Error::CmsUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            });
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(Error::CmsUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for CmsUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CmsUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CmsUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for CmsUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CmsUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for CmsUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
