//! Activities service.

use clubcms_core::{Activity, ListEnvelope, Query};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the activities collection.
const ACTIVITIES: &str = "/api/actividades";

/// Read access to the club's activities.
#[derive(Debug, Clone)]
pub struct ActivitiesService {
    client: CmsClient,
}

impl ActivitiesService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch all activities in the order they were written.
    pub async fn list(&self) -> Result<ListEnvelope<Activity>, Error> {
        let query = Query::new().sort("createdAt:asc");
        self.client.get(ACTIVITIES, Some(&query)).await
    }
}
