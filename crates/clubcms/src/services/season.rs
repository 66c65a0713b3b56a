//! Season dates service.

use clubcms_core::{Envelope, Query, SeasonDates};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the season single type.
const SEASON: &str = "/api/fecha";

/// Read access to the season calendar.
#[derive(Debug, Clone)]
pub struct SeasonService {
    client: CmsClient,
}

impl SeasonService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch the season record with its shift schedules.
    pub async fn get(&self) -> Result<Envelope<SeasonDates>, Error> {
        let query = Query::new().populate_all();
        self.client.get(SEASON, Some(&query)).await
    }
}
