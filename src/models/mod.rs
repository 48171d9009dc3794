//! Display models for CLI output
//!
//! API records are converted into flat, column-named rows before they reach
//! the output layer.

pub mod display;

pub use display::{
    CatalogDetail, CatalogDisplay, MedicineDetail, MedicineDisplay, ProfileDisplay,
    ScheduleDisplay,
};
