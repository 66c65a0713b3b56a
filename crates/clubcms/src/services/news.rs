//! News service.

use clubcms_core::{Article, DocumentId, Envelope, ListEnvelope, PageRequest, Query, Relation};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the news collection.
const NEWS: &str = "/api/noticias";

/// Fields populated for an article's cover image.
const IMAGE_FIELDS: [&str; 3] = ["id", "url", "formats"];

/// Read access to the news articles.
#[derive(Debug, Clone)]
pub struct NewsService {
    client: CmsClient,
}

impl NewsService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch a page of articles, newest first.
    pub async fn list(&self, page: PageRequest) -> Result<ListEnvelope<Article>, Error> {
        let query = Query::new()
            .sort("createdAt:desc")
            .populate_relation("Imagen", Relation::with_fields(IMAGE_FIELDS))
            .paginate(page);
        self.client.get(NEWS, Some(&query)).await
    }

    /// Fetch a single article by its document id.
    pub async fn by_document_id(&self, id: &DocumentId) -> Result<Envelope<Article>, Error> {
        let query =
            Query::new().populate_relation("Imagen", Relation::with_fields(IMAGE_FIELDS));
        self.client.get(&format!("{NEWS}/{id}"), Some(&query)).await
    }
}
