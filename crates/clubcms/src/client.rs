//! Generic CMS HTTP client.

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, error, instrument, trace};

use clubcms_core::{CmsUrl, query};

use crate::config::CmsConfig;
use crate::error::{Error, StatusError};

/// Error envelope the CMS wraps failure responses in.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for reads against the CMS content API.
///
/// Stateless between calls and cheap to clone; the resource services each
/// hold a clone and never share mutable state.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    base: CmsUrl,
}

impl CmsClient {
    /// Create a new client for the configured CMS.
    pub fn new(config: CmsConfig) -> Self {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| concat!("clubcms/", env!("CARGO_PKG_VERSION")).to_string());

        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("failed to build HTTP client");

        Self {
            http,
            base: config.base_url,
        }
    }

    /// Returns the base address this client is configured for.
    pub fn base_url(&self) -> &CmsUrl {
        &self.base
    }

    /// Perform a typed GET against an API endpoint.
    ///
    /// The query descriptor, when present, is serialized into the CMS's
    /// bracket-notation query string. The response body is deserialized as
    /// `R`; a shape mismatch surfaces as a [`Error::Decode`] rather than a
    /// silently wrong value.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get<Q, R>(&self, endpoint: &str, query: Option<&Q>) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.request_url(endpoint, query)?;
        debug!(endpoint, "CMS query");
        trace!(?query, "query descriptor");

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|err| {
                error!(endpoint, error = %err, "CMS request failed");
                Error::from(err)
            })?;

        self.handle_response(endpoint, response).await
    }

    /// Build the absolute request URL for an endpoint and query descriptor.
    fn request_url<Q: Serialize>(&self, endpoint: &str, query: Option<&Q>) -> Result<String, Error> {
        let mut url = self.base.join(endpoint)?;
        if let Some(query) = query {
            let encoded = query::encode(query)?;
            if !encoded.is_empty() {
                url.push('?');
                url.push_str(&encoded);
            }
        }
        Ok(url)
    }

    /// Handle a CMS response, parsing the body or the error envelope.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "CMS response");

        if status.is_success() {
            response.json::<R>().await.map_err(|err| {
                error!(endpoint, error = %err, "CMS response body rejected");
                Error::from(err)
            })
        } else {
            let err = Self::parse_error_response(status, response).await;
            error!(endpoint, status = err.status, "CMS returned an error status");
            Err(Error::Status(err))
        }
    }

    /// Parse the CMS error envelope, falling back to the status text.
    async fn parse_error_response(status: StatusCode, response: reqwest::Response) -> StatusError {
        let status_text = status.canonical_reason().map(str::to_string);

        match response.json::<ErrorEnvelope>().await {
            Ok(envelope) => StatusError::new(
                status.as_u16(),
                envelope.error.name,
                envelope.error.message.or(status_text),
            ),
            Err(_) => StatusError::new(status.as_u16(), None, status_text),
        }
    }
}
