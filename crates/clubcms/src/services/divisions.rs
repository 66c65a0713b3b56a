//! Age divisions service.

use clubcms_core::{AgeDivision, ListEnvelope, Query};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the divisions collection.
const DIVISIONS: &str = "/api/divisiones-edades";

/// Read access to the division/age tables.
#[derive(Debug, Clone)]
pub struct DivisionsService {
    client: CmsClient,
}

impl DivisionsService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch all divisions with their age columns, oldest entry first.
    pub async fn list(&self) -> Result<ListEnvelope<AgeDivision>, Error> {
        let query = Query::new().sort("createdAt:asc").populate_all();
        self.client.get(DIVISIONS, Some(&query)).await
    }
}
