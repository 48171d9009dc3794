//! Display model implementations for table and JSON output

mod catalog;
mod common;
mod medicine;
mod profile;
mod schedule;

pub use catalog::{CatalogDetail, CatalogDisplay};
pub use medicine::{MedicineDetail, MedicineDisplay};
pub use profile::ProfileDisplay;
pub use schedule::ScheduleDisplay;
