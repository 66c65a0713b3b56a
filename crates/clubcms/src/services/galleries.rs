//! Galleries service.

use clubcms_core::{Album, DocumentId, Envelope, ListEnvelope, PageRequest, Query, Relation};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the galleries collection.
const GALLERIES: &str = "/api/galerias";

/// Fields populated for an album's photos.
const PHOTO_FIELDS: [&str; 7] = [
    "id",
    "documentId",
    "name",
    "width",
    "height",
    "url",
    "formats",
];

/// Read access to the photo albums.
#[derive(Debug, Clone)]
pub struct GalleriesService {
    client: CmsClient,
}

impl GalleriesService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch a page of albums, newest first.
    pub async fn list(&self, page: PageRequest) -> Result<ListEnvelope<Album>, Error> {
        let query = Query::new()
            .sort("createdAt:desc")
            .populate_relation("Fotos", Relation::with_fields(PHOTO_FIELDS))
            .paginate(page);
        self.client.get(GALLERIES, Some(&query)).await
    }

    /// Fetch a single album by its document id.
    pub async fn by_document_id(&self, id: &DocumentId) -> Result<Envelope<Album>, Error> {
        let query =
            Query::new().populate_relation("Fotos", Relation::with_fields(PHOTO_FIELDS));
        self.client
            .get(&format!("{GALLERIES}/{id}"), Some(&query))
            .await
    }
}
