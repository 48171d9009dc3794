//! MedTrack API data models
//!
//! Request and response records mirrored from the API's JSON, organized by
//! resource type.

mod auth;
mod catalog;
mod medicine;
mod profile;
mod schedule;

pub use auth::{
    AuthResponse, FcmTokenRequest, ForgotPasswordRequest, Health, LoginRequest, RegisterRequest,
};
pub use catalog::{GlobalMedicine, GlobalMedicineRequest};
pub use medicine::{
    Composition, LOW_STOCK_THRESHOLD, Medicine, MedicineCreateRequest, MedicineStatus,
    MedicineUpdateRequest, StrengthValue, parse_expiry,
};
pub use profile::{Profile, ProfileRequest};
pub use schedule::{Frequency, Schedule, ScheduleCreateRequest, ScheduleUpdateRequest};
