//! Resource services.
//!
//! One service per content type, each a thin, fixed-configuration
//! specialization of [`CmsClient`](crate::CmsClient). A service method
//! never accepts a free-form query - only the pagination declared in its
//! signature - so the exact shape of every CMS request stays auditable in
//! one place.

mod activities;
mod contact;
mod divisions;
mod enrollment;
mod faqs;
mod galleries;
mod news;
mod prices;
mod season;
mod settings;
mod team;

pub use activities::ActivitiesService;
pub use contact::ContactService;
pub use divisions::DivisionsService;
#[allow(deprecated)]
pub use enrollment::EnrollmentService;
pub use faqs::FaqsService;
pub use galleries::GalleriesService;
pub use news::NewsService;
pub use prices::PricesService;
pub use season::SeasonService;
pub use settings::SettingsService;
pub use team::TeamService;
