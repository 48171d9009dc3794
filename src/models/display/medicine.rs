//! Medicine display models
//!
//! The list row carries the two derived signals a user scans for: how close
//! the expiry is, and whether stock is running low.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use super::common::{or_empty, truncate_string};
use crate::client::models::Medicine;
use crate::expiry;

const NOTES_WIDTH: usize = 40;

fn quantity_label(medicine: &Medicine) -> String {
    if medicine.is_low_stock() {
        format!("{} (low)", medicine.quantity)
    } else {
        medicine.quantity.to_string()
    }
}

/// Medicine row for list output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MedicineDisplay {
    #[tabled(rename = "MEDICINE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PROFILE")]
    pub profile: String,

    #[tabled(rename = "QTY")]
    pub quantity: String,

    #[tabled(rename = "EXPIRY")]
    pub expiry_date: String,

    #[tabled(rename = "EXPIRES")]
    pub expires: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl MedicineDisplay {
    /// Build the row with expiry measured from `now`
    pub fn at(medicine: Medicine, now: DateTime<Utc>) -> Self {
        let expiry = expiry::classify(medicine.expiry(), now);
        Self {
            quantity: quantity_label(&medicine),
            expires: expiry.label(),
            expiry_date: or_empty(medicine.expiry_date.as_deref()),
            profile: medicine
                .profile_name
                .unwrap_or_else(|| medicine.profile_id.clone()),
            status: medicine.status.to_string(),
            id: medicine.id,
            name: medicine.name,
        }
    }
}

impl From<Medicine> for MedicineDisplay {
    fn from(medicine: Medicine) -> Self {
        Self::at(medicine, Utc::now())
    }
}

/// Full medicine record for single-item output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MedicineDetail {
    #[tabled(rename = "MEDICINE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PROFILE")]
    pub profile: String,

    #[tabled(rename = "QTY")]
    pub quantity: String,

    #[tabled(rename = "EXPIRY")]
    pub expiry_date: String,

    #[tabled(rename = "EXPIRES")]
    pub expires: String,

    #[tabled(rename = "DOSAGE")]
    pub dosage: String,

    #[tabled(rename = "FORM")]
    pub form: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "COMPOSITION")]
    pub composition: String,

    #[tabled(rename = "NOTES")]
    pub notes: String,

    #[tabled(rename = "IMAGE")]
    pub image_url: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Medicine> for MedicineDetail {
    fn from(medicine: Medicine) -> Self {
        let expiry = expiry::medicine_status(&medicine);
        let composition = medicine
            .composition
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            quantity: quantity_label(&medicine),
            expires: expiry.label(),
            expiry_date: or_empty(medicine.expiry_date.as_deref()),
            profile: medicine
                .profile_name
                .unwrap_or_else(|| medicine.profile_id.clone()),
            dosage: or_empty(medicine.dosage.as_deref()),
            form: or_empty(medicine.form.as_deref()),
            category: or_empty(medicine.category.as_deref()),
            composition,
            notes: truncate_string(medicine.notes.as_deref().unwrap_or_default(), NOTES_WIDTH),
            image_url: or_empty(medicine.image_url.as_deref()),
            status: medicine.status.to_string(),
            id: medicine.id,
            name: medicine.name,
        }
    }
}
