//! MedTrack API client
//!
//! Every request goes through [`MedTrackClient::request`], which attaches the
//! stored credential and hands the response to the
//! [`ResponseInterceptor`](interceptor::ResponseInterceptor) before any
//! caller sees it.

pub mod api;
pub mod error_message;
pub mod events;
pub mod interceptor;
pub mod medtrack;
pub mod models;

pub use api::{AuthApi, CatalogApi, MedicineApi, ProfileApi, ScheduleApi};
pub use events::{ClientEvent, EventBus, drain};
pub use medtrack::{MedTrackClient, RequestBody, RequestConfig};
