//! API trait definitions split by resource
//!
//! - [`AuthApi`] - Sign-in, registration, device tokens, health
//! - [`ProfileApi`] - Profiles that own medicines
//! - [`MedicineApi`] - Medicines, dose tracking, image upload
//! - [`ScheduleApi`] - Dosing schedules
//! - [`CatalogApi`] - The shared medicine catalog

mod auth;
mod catalog;
mod medicine;
mod profile;
mod schedule;

pub use auth::AuthApi;
pub use catalog::CatalogApi;
pub use medicine::MedicineApi;
pub use profile::ProfileApi;
pub use schedule::ScheduleApi;
