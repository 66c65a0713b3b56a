//! Site settings service.

use clubcms_core::{Envelope, Query, Settings};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the settings single type.
const SETTINGS: &str = "/api/ajuste";

/// Read access to the site-wide feature switches.
#[derive(Debug, Clone)]
pub struct SettingsService {
    client: CmsClient,
}

impl SettingsService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch the settings record, including the enrollment form attachment.
    pub async fn get(&self) -> Result<Envelope<Settings>, Error> {
        let query = Query::new().populate_all();
        self.client.get(SETTINGS, Some(&query)).await
    }
}
