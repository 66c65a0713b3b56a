//! Contact information service.

use clubcms_core::{Contact, Envelope, Query};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the contact single type.
const CONTACT: &str = "/api/contacto";

/// Read access to the club's contact details.
#[derive(Debug, Clone)]
pub struct ContactService {
    client: CmsClient,
}

impl ContactService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch the contact record.
    pub async fn get(&self) -> Result<Envelope<Contact>, Error> {
        self.client.get(CONTACT, None::<&Query>).await
    }
}
