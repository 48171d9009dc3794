//! Medicine models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quantity at or below which stock is reported as low
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Medicine lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MedicineStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for MedicineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MedicineStatus::Active => write!(f, "ACTIVE"),
            MedicineStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}

/// Strength of one ingredient; the API accepts numbers or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrengthValue {
    Number(f64),
    Text(String),
}

impl From<&str> for StrengthValue {
    fn from(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => StrengthValue::Number(n),
            _ => StrengthValue::Text(raw.trim().to_string()),
        }
    }
}

impl std::fmt::Display for StrengthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthValue::Number(n) => write!(f, "{}", n),
            StrengthValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One active ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub name: String,
    pub strength_value: StrengthValue,
    pub strength_unit: String,
}

impl std::fmt::Display for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}{}", self.name, self.strength_value, self.strength_unit)
    }
}

/// A medicine owned by a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,

    #[serde(default)]
    pub user_id: String,

    #[serde(default)]
    pub profile_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,

    #[serde(default)]
    pub quantity: u32,

    /// Expiry date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<Vec<Composition>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,

    pub status: MedicineStatus,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Medicine {
    /// Parsed expiry date; missing or malformed dates yield `None`
    pub fn expiry(&self) -> Option<NaiveDate> {
        parse_expiry(self.expiry_date.as_deref()?)
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }
}

/// Parse a `YYYY-MM-DD` date, tolerating a trailing time component
pub fn parse_expiry(raw: &str) -> Option<NaiveDate> {
    let date = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Payload for creating a medicine under a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineCreateRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,

    pub quantity: u32,

    /// YYYY-MM-DD
    pub expiry_date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<Vec<Composition>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

/// Partial update for a medicine; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<Vec<Composition>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

impl MedicineUpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image_url.is_none()
            && self.dosage.is_none()
            && self.quantity.is_none()
            && self.expiry_date.is_none()
            && self.category.is_none()
            && self.notes.is_none()
            && self.composition.is_none()
            && self.form.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEDICINE_JSON: &str = r#"{
        "id": "m1",
        "userId": "u1",
        "profileId": "p1",
        "profileName": "Ann",
        "name": "Paracetamol",
        "quantity": 4,
        "expiryDate": "2026-01-31",
        "composition": [
            { "name": "Paracetamol", "strengthValue": 500, "strengthUnit": "mg" },
            { "name": "Caffeine", "strengthValue": "trace", "strengthUnit": "" }
        ],
        "status": "ACTIVE",
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-02T00:00:00Z"
    }"#;

    #[test]
    fn test_medicine_deserializes() {
        let medicine: Medicine = serde_json::from_str(MEDICINE_JSON).unwrap();

        assert_eq!(medicine.profile_name.as_deref(), Some("Ann"));
        assert_eq!(medicine.status, MedicineStatus::Active);
        assert_eq!(medicine.expiry(), NaiveDate::from_ymd_opt(2026, 1, 31));
        assert!(medicine.is_low_stock());

        let composition = medicine.composition.unwrap();
        assert_eq!(composition[0].strength_value, StrengthValue::Number(500.0));
        assert_eq!(composition[0].to_string(), "Paracetamol 500mg");
        assert_eq!(
            composition[1].strength_value,
            StrengthValue::Text("trace".to_string())
        );
    }

    #[test]
    fn test_parse_expiry() {
        assert_eq!(parse_expiry("2025-12-01"), NaiveDate::from_ymd_opt(2025, 12, 1));
        assert_eq!(
            parse_expiry("2025-12-01T00:00:00Z"),
            NaiveDate::from_ymd_opt(2025, 12, 1)
        );
        assert_eq!(parse_expiry("soon"), None);
        assert_eq!(parse_expiry(""), None);
    }

    #[test]
    fn test_strength_value_from_str() {
        assert_eq!(StrengthValue::from("2.5"), StrengthValue::Number(2.5));
        assert_eq!(
            StrengthValue::from("1/2"),
            StrengthValue::Text("1/2".to_string())
        );
    }

    #[test]
    fn test_create_request_omits_empty_optionals() {
        let req = MedicineCreateRequest {
            name: "Ibuprofen".to_string(),
            quantity: 10,
            expiry_date: "2027-05-01".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["expiryDate"], "2027-05-01");
        assert!(json.get("imageUrl").is_none());
        assert!(json.get("composition").is_none());
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(MedicineUpdateRequest::default().is_empty());

        let req = MedicineUpdateRequest {
            quantity: Some(3),
            ..Default::default()
        };
        assert!(!req.is_empty());
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"quantity":3}"#);
    }
}
