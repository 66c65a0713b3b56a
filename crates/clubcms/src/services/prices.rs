//! Prices service.

use clubcms_core::{ListEnvelope, PriceShift, Query, Relation};

use crate::client::CmsClient;
use crate::error::Error;

/// Endpoint for the prices collection.
const PRICES: &str = "/api/precios";

/// Read access to the season's shift prices.
#[derive(Debug, Clone)]
pub struct PricesService {
    client: CmsClient,
}

impl PricesService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Fetch all shifts with their conditions and per-payment-method prices.
    ///
    /// Conditions nest two levels deep, so they are populated recursively.
    pub async fn list(&self) -> Result<ListEnvelope<PriceShift>, Error> {
        let query = Query::new()
            .sort("createdAt:asc")
            .populate_relation("Condiciones", Relation::new().populate_all());
        self.client.get(PRICES, Some(&query)).await
    }
}
