//! Global medicine catalog models

use serde::{Deserialize, Serialize};

/// Reference entry in the shared medicine catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalMedicine {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage_form: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub indications: Vec<String>,

    #[serde(default)]
    pub contraindications: Vec<String>,

    #[serde(default)]
    pub side_effects: Vec<String>,

    #[serde(default)]
    pub warnings: Vec<String>,

    #[serde(default)]
    pub interactions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atc_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fda_approval_date: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Catalog entry fields; `name` is required on create, everything is
/// optional on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalMedicineRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage_form: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub indications: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contraindications: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactions: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub atc_code: Option<String>,

    /// YYYY-MM-DD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fda_approval_date: Option<String>,
}
