//! Dosing schedule API

use async_trait::async_trait;
use reqwest::Method;

use crate::client::MedTrackClient;
use crate::client::models::{Schedule, ScheduleCreateRequest, ScheduleUpdateRequest};
use crate::error::Result;

/// Schedule operations. Schedules are created under a medicine and
/// addressed by their own id afterwards.
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn create_schedule(
        &self,
        medicine_id: &str,
        request: &ScheduleCreateRequest,
    ) -> Result<Schedule>;

    async fn list_medicine_schedules(&self, medicine_id: &str) -> Result<Vec<Schedule>>;

    async fn list_profile_schedules(&self, profile_id: &str) -> Result<Vec<Schedule>>;

    /// Every schedule the user owns
    async fn list_schedules(&self) -> Result<Vec<Schedule>>;

    async fn get_schedule(&self, schedule_id: &str) -> Result<Schedule>;

    async fn update_schedule(
        &self,
        schedule_id: &str,
        request: &ScheduleUpdateRequest,
    ) -> Result<Schedule>;

    async fn delete_schedule(&self, schedule_id: &str) -> Result<()>;
}

#[async_trait]
impl ScheduleApi for MedTrackClient {
    async fn create_schedule(
        &self,
        medicine_id: &str,
        request: &ScheduleCreateRequest,
    ) -> Result<Schedule> {
        self.send_json(
            Method::POST,
            &format!("/api/medicines/{}/schedules", medicine_id),
            request,
        )
        .await
    }

    async fn list_medicine_schedules(&self, medicine_id: &str) -> Result<Vec<Schedule>> {
        self.get_json(&format!("/api/medicines/{}/schedules", medicine_id))
            .await
    }

    async fn list_profile_schedules(&self, profile_id: &str) -> Result<Vec<Schedule>> {
        self.get_json(&format!("/api/profiles/{}/schedules", profile_id))
            .await
    }

    async fn list_schedules(&self) -> Result<Vec<Schedule>> {
        self.get_json("/api/schedules").await
    }

    async fn get_schedule(&self, schedule_id: &str) -> Result<Schedule> {
        self.get_json(&format!("/api/schedules/{}", schedule_id))
            .await
    }

    async fn update_schedule(
        &self,
        schedule_id: &str,
        request: &ScheduleUpdateRequest,
    ) -> Result<Schedule> {
        self.send_json(
            Method::PUT,
            &format!("/api/schedules/{}", schedule_id),
            request,
        )
        .await
    }

    async fn delete_schedule(&self, schedule_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/api/schedules/{}", schedule_id))
            .await
    }
}
