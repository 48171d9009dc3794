//! Dosing schedule models

use serde::{Deserialize, Serialize};

/// How often a schedule fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Custom,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Biweekly => "BIWEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Custom => "CUSTOM",
        };
        write!(f, "{}", label)
    }
}

/// A dosing reminder for one medicine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,

    pub medicine_id: String,

    #[serde(default)]
    pub profile_id: String,

    #[serde(default)]
    pub user_id: String,

    /// HH:mm:ss
    pub time_of_day: String,

    pub frequency: Frequency,

    pub is_active: bool,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCreateRequest {
    pub time_of_day: String,
    pub frequency: Frequency,
    pub is_active: bool,
}

/// Partial update for a schedule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ScheduleUpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.time_of_day.is_none() && self.frequency.is_none() && self.is_active.is_none()
    }
}
