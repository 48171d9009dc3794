//! Profile models

use serde::{Deserialize, Serialize};

/// A person whose medicines are tracked
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,

    #[serde(default)]
    pub user_id: String,

    pub name: String,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update payload for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
}
