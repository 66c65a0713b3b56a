//! Client configuration.

use std::time::Duration;

use clubcms_core::CmsUrl;

use crate::error::Error;

/// Environment variable holding the CMS base address.
pub const STRAPI_URL_VAR: &str = "STRAPI_URL";

/// Configuration for a [`CmsClient`](crate::CmsClient).
///
/// The base address is injected here rather than read inside the client,
/// so tests can point the client at a local mock server.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use clubcms::{CmsConfig, CmsUrl};
///
/// # fn example() -> Result<(), clubcms::Error> {
/// let config = CmsConfig::new(CmsUrl::new("https://cms.club.example")?)
///     .timeout(Duration::from_secs(10));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CmsConfig {
    pub base_url: CmsUrl,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Overrides the default `clubcms/<version>` user agent.
    pub user_agent: Option<String>,
}

impl CmsConfig {
    /// Create a configuration for the given base address.
    pub fn new(base_url: CmsUrl) -> Self {
        Self {
            base_url,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Read the base address from the `STRAPI_URL` environment variable.
    ///
    /// Server-side use only; the address never reaches the browser through
    /// this layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or not a valid CMS URL.
    pub fn from_env() -> Result<Self, Error> {
        let value = std::env::var(STRAPI_URL_VAR).map_err(|_| Error::Config {
            message: format!("{STRAPI_URL_VAR} is not set"),
        })?;
        Ok(Self::new(CmsUrl::new(&value)?))
    }
}
