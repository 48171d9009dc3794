//! Profile display model

use serde::Serialize;
use tabled::Tabled;

use super::common::format_date;
use crate::client::models::Profile;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProfileDisplay {
    #[tabled(rename = "PROFILE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Profile> for ProfileDisplay {
    fn from(profile: Profile) -> Self {
        Self {
            created: format_date(profile.created_at.as_deref()),
            id: profile.id,
            name: profile.name,
        }
    }
}
