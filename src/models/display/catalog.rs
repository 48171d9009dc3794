//! Global catalog display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, or_empty};
use crate::client::models::GlobalMedicine;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CatalogDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "BRAND")]
    pub brand_name: String,

    #[tabled(rename = "GENERIC")]
    pub generic_name: String,

    #[tabled(rename = "FORM")]
    pub dosage_form: String,

    #[tabled(rename = "STRENGTH")]
    pub strength: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,
}

impl From<GlobalMedicine> for CatalogDisplay {
    fn from(entry: GlobalMedicine) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            brand_name: entry.brand_name.unwrap_or_default(),
            generic_name: entry.generic_name.unwrap_or_default(),
            dosage_form: entry.dosage_form.unwrap_or_default(),
            strength: entry.strength.unwrap_or_default(),
            category: entry.category.unwrap_or_default(),
        }
    }
}

/// Every catalog field, lists joined for display
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CatalogDetail {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "BRAND")]
    pub brand_name: String,

    #[tabled(rename = "GENERIC")]
    pub generic_name: String,

    #[tabled(rename = "FORM")]
    pub dosage_form: String,

    #[tabled(rename = "STRENGTH")]
    pub strength: String,

    #[tabled(rename = "MANUFACTURER")]
    pub manufacturer: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "ATC CODE")]
    pub atc_code: String,

    #[tabled(rename = "FDA APPROVED")]
    pub fda_approval_date: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "INDICATIONS")]
    pub indications: String,

    #[tabled(rename = "CONTRAINDICATIONS")]
    pub contraindications: String,

    #[tabled(rename = "SIDE EFFECTS")]
    pub side_effects: String,

    #[tabled(rename = "WARNINGS")]
    pub warnings: String,

    #[tabled(rename = "INTERACTIONS")]
    pub interactions: String,

    #[tabled(rename = "STORAGE")]
    pub storage_instructions: String,
}

impl From<GlobalMedicine> for CatalogDetail {
    fn from(entry: GlobalMedicine) -> Self {
        Self {
            fda_approval_date: format_date(entry.fda_approval_date.as_deref()),
            description: or_empty(entry.description.as_deref()),
            indications: entry.indications.join(", "),
            contraindications: entry.contraindications.join(", "),
            side_effects: entry.side_effects.join(", "),
            warnings: entry.warnings.join(", "),
            interactions: entry.interactions.join(", "),
            storage_instructions: or_empty(entry.storage_instructions.as_deref()),
            manufacturer: or_empty(entry.manufacturer.as_deref()),
            atc_code: or_empty(entry.atc_code.as_deref()),
            id: entry.id,
            name: entry.name,
            brand_name: entry.brand_name.unwrap_or_default(),
            generic_name: entry.generic_name.unwrap_or_default(),
            dosage_form: entry.dosage_form.unwrap_or_default(),
            strength: entry.strength.unwrap_or_default(),
            category: entry.category.unwrap_or_default(),
        }
    }
}
