//! Team service.

use clubcms_core::{ListEnvelope, Query, Relation, TeamMember};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the team collection.
const TEAM: &str = "/api/equipos";

/// Fields populated for a member's portrait.
const IMAGE_FIELDS: [&str; 2] = ["id", "formats"];

/// Read access to the club's staff listing.
#[derive(Debug, Clone)]
pub struct TeamService {
    client: CmsClient,
}

impl TeamService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch all staff members in their configured display order.
    pub async fn list(&self) -> Result<ListEnvelope<TeamMember>, Error> {
        let query = Query::new()
            .sort("Orden:asc")
            .populate_relation("Imagen", Relation::with_fields(IMAGE_FIELDS));
        self.client.get(TEAM, Some(&query)).await
    }
}
