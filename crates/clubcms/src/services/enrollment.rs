//! Legacy enrollment-status service.

use clubcms_core::{EnrollmentStatus, Envelope};

use crate::client::CmsClient;
use crate::error::Error;
use crate::services::SettingsService;

/// Read access to the legacy inscription flag.
///
/// The flag now lives on the settings record; this adapter keeps the old
/// response shape alive without a second endpoint round-trip.
#[deprecated(note = "read `Settings::enrollment_enabled` via SettingsService instead")]
#[derive(Debug, Clone)]
pub struct EnrollmentService {
    settings: SettingsService,
}

#[allow(deprecated)]
impl EnrollmentService {
    /// Create the service on top of a configured client.
    pub fn new(client: CmsClient) -> Self {
        Self {
            settings: SettingsService::new(client),
        }
    }

    /// Fetch the inscription flag in its legacy envelope shape.
    pub async fn status(&self) -> Result<Envelope<EnrollmentStatus>, Error> {
        let settings = self.settings.get().await?;
        Ok(Envelope {
            data: EnrollmentStatus::from(&settings.data),
            meta: settings.meta,
        })
    }
}
