//! Frequently asked questions service.

use clubcms_core::{Faq, ListEnvelope, Query};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the FAQ collection.
const FAQS: &str = "/api/preguntas-frecuentes";

/// Read access to the FAQ entries.
#[derive(Debug, Clone)]
pub struct FaqsService {
    client: CmsClient,
}

impl FaqsService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch all questions in the order they were written.
    pub async fn list(&self) -> Result<ListEnvelope<Faq>, Error> {
        let query = Query::new().sort("createdAt:asc");
        self.client.get(FAQS, Some(&query)).await
    }
}
