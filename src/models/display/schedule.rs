//! Schedule display model

use serde::Serialize;
use tabled::Tabled;

use super::common::check;
use crate::client::models::Schedule;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ScheduleDisplay {
    #[tabled(rename = "SCHEDULE ID")]
    pub id: String,

    #[tabled(rename = "MEDICINE ID")]
    pub medicine_id: String,

    #[tabled(rename = "TIME")]
    pub time_of_day: String,

    #[tabled(rename = "FREQUENCY")]
    pub frequency: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,
}

impl From<Schedule> for ScheduleDisplay {
    fn from(schedule: Schedule) -> Self {
        Self {
            id: schedule.id,
            medicine_id: schedule.medicine_id,
            time_of_day: schedule.time_of_day,
            frequency: schedule.frequency.to_string(),
            active: check(schedule.is_active),
        }
    }
}
