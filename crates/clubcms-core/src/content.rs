//! Content-type records.
//!
//! Read-only projections of CMS records. Field names are English on the
//! Rust side; the wire names the CMS schema uses are preserved through
//! serde renames. Top-level records carry identity and timestamps and
//! implement [`Document`]; nested components only carry their component id.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::media::{Image, Photo, UploadFile};

/// Common identity of a top-level content record.
///
/// A record without `publishedAt` is an unpublished draft; the public site
/// must not rely on it.
pub trait Document {
    /// The stable document identifier assigned by the CMS.
    fn document_id(&self) -> &str;

    /// Publication timestamp, absent for drafts.
    fn published_at(&self) -> Option<&DateTime<Utc>>;

    /// True if this record has never been published.
    fn is_draft(&self) -> bool {
        self.published_at().is_none()
    }
}

macro_rules! impl_document {
    ($($ty:ty),+ $(,)?) => {
        $(impl Document for $ty {
            fn document_id(&self) -> &str {
                &self.document_id
            }

            fn published_at(&self) -> Option<&DateTime<Utc>> {
                self.published_at.as_ref()
            }
        })+
    };
}

// ============================================================================
// Age Divisions
// ============================================================================

/// One column of a division table: a division name and its age range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeColumn {
    pub id: i64,
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "Edades")]
    pub ages: String,
}

/// A titled group of divisions and the ages they admit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeDivision {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Titulo")]
    pub title: String,
    #[serde(rename = "Columna", default)]
    pub columns: Vec<AgeColumn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Frequently Asked Questions
// ============================================================================

/// A question/answer pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Pregunta")]
    pub question: String,
    #[serde(rename = "Respuesta")]
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Contact
// ============================================================================

/// The club's contact details (single-type record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Telefono")]
    pub phone: String,
    #[serde(rename = "Whatsapp")]
    pub whatsapp: String,
    #[serde(rename = "Ubicacion")]
    pub location: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Horarios")]
    pub hours: String,
    #[serde(rename = "Facebook")]
    pub facebook: String,
    #[serde(rename = "Instagram")]
    pub instagram: String,
    #[serde(rename = "MapUrl")]
    pub map_url: String,
    #[serde(rename = "MapIframe")]
    pub map_iframe: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Settings
// ============================================================================

/// Site-wide feature switches (single-type record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "HabilitarEquipo")]
    pub team_enabled: bool,
    #[serde(rename = "HabilitarInscripciones")]
    pub enrollment_enabled: bool,
    #[serde(rename = "HabilitarPrecios")]
    pub prices_enabled: bool,
    /// Downloadable enrollment form, when one has been uploaded.
    #[serde(rename = "FormularioInscripcion", default, skip_serializing_if = "Option::is_none")]
    pub enrollment_form: Option<UploadFile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Legacy inscription-status record shape.
///
/// Kept for callers that still consume the old flag; new code reads
/// [`Settings::enrollment_enabled`] directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStatus {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Estado")]
    pub open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<&Settings> for EnrollmentStatus {
    fn from(settings: &Settings) -> Self {
        Self {
            id: settings.id,
            document_id: settings.document_id.clone(),
            open: settings.enrollment_enabled,
            created_at: settings.created_at,
            updated_at: settings.updated_at,
            published_at: settings.published_at,
        }
    }
}

// ============================================================================
// Activities
// ============================================================================

/// Icon-picker component attached to an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    pub width: u32,
    pub height: u32,
    pub icon_data: String,
    pub icon_name: String,
    pub is_svg_editable: bool,
    pub is_icon_name_editable: bool,
}

/// An activity offered by the club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Titulo")]
    pub title: String,
    #[serde(rename = "Subtitulo")]
    pub subtitle: String,
    #[serde(rename = "Descripcion")]
    pub description: String,
    #[serde(rename = "Icono")]
    pub icon: Icon,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Season Dates
// ============================================================================

/// Entry/exit times for one shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftHours {
    pub id: i64,
    #[serde(rename = "Turno")]
    pub shift: String,
    #[serde(rename = "Ingreso")]
    pub entry: String,
    #[serde(rename = "Salida")]
    pub exit: String,
}

/// The season calendar (single-type record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDates {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Temporada")]
    pub season: String,
    #[serde(rename = "Inicio")]
    pub start: NaiveDate,
    #[serde(rename = "Fin")]
    pub end: NaiveDate,
    /// Free-text description of non-working days.
    #[serde(rename = "NoLaborables")]
    pub non_working_days: String,
    #[serde(rename = "IngresoSalida", default)]
    pub entry_exit: Vec<ShiftHours>,
    #[serde(rename = "HorariosGuardia", default)]
    pub guard_hours: Vec<ShiftHours>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Prices
// ============================================================================

/// A price for one payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub id: i64,
    #[serde(rename = "MedioDePago")]
    pub payment_method: String,
    #[serde(rename = "Precio")]
    pub price: f64,
}

/// A pricing condition and its per-payment-method prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCondition {
    pub id: i64,
    #[serde(rename = "Condicion")]
    pub condition: String,
    #[serde(rename = "precios", default)]
    pub prices: Vec<PriceEntry>,
}

/// Prices for one shift of the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceShift {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Turno")]
    pub shift: String,
    #[serde(rename = "Condiciones", default)]
    pub conditions: Vec<PriceCondition>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Team
// ============================================================================

/// A member of the club's staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Activo")]
    pub active: bool,
    /// Display order; the CMS stores it as text and sorts lexicographically.
    #[serde(rename = "Orden")]
    pub order: String,
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Titulo")]
    pub title: String,
    #[serde(rename = "Descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Facebook", default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(rename = "Instagram", default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(rename = "Linkedin", default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(rename = "Imagen")]
    pub image: Image,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

// ============================================================================
// News
// ============================================================================

/// A news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Titulo")]
    pub title: String,
    #[serde(rename = "Subtitulo", default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "Texto")]
    pub body: String,
    #[serde(rename = "Imagen")]
    pub image: Image,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Galleries
// ============================================================================

/// A photo album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    pub document_id: String,
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Fotos", default)]
    pub photos: Vec<Photo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl_document!(
    AgeDivision,
    Faq,
    Contact,
    Settings,
    EnrollmentStatus,
    Activity,
    SeasonDates,
    PriceShift,
    TeamMember,
    Article,
    Album,
);
