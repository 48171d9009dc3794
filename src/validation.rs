//! Client-side form checks
//!
//! Everything here runs before a request is built, so a failure never
//! reaches the network.

use crate::client::models::{
    Composition, ForgotPasswordRequest, LoginRequest, MedicineCreateRequest,
    MedicineUpdateRequest, RegisterRequest, ScheduleUpdateRequest, StrengthValue, parse_expiry,
};
use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Default time for a new schedule
pub const DEFAULT_TIME_OF_DAY: &str = "08:00:00";

type Result<T> = std::result::Result<T, ValidationError>;

fn required_email(email: &str) -> Result<String> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    Ok(email.to_string())
}

pub fn login(email: &str, password: &str) -> Result<LoginRequest> {
    let email = required_email(email)?;
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(LoginRequest {
        email,
        password: password.to_string(),
    })
}

pub fn register(email: &str, password: &str, confirm: &str) -> Result<RegisterRequest> {
    let email = required_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(RegisterRequest {
        email,
        password: password.to_string(),
    })
}

pub fn forgot_password(
    email: &str,
    new_password: &str,
    confirm: &str,
) -> Result<ForgotPasswordRequest> {
    let email = required_email(email)?;
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::NewPasswordTooShort);
    }
    if new_password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(ForgotPasswordRequest {
        email,
        new_password: new_password.to_string(),
    })
}

pub fn name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(name.to_string())
}

/// A quantity must be at least 1
pub fn quantity(raw: i64) -> Result<u32> {
    if raw <= 0 {
        return Err(ValidationError::InvalidQuantity);
    }
    u32::try_from(raw).map_err(|_| ValidationError::InvalidQuantity)
}

/// Normalize an expiry date to `YYYY-MM-DD`
pub fn expiry_date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::ExpiryRequired);
    }
    parse_expiry(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or(ValidationError::InvalidExpiry)
}

/// Any other `YYYY-MM-DD` date field
pub fn date(raw: &str) -> Result<String> {
    parse_expiry(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .ok_or(ValidationError::InvalidDate)
}

/// Strict `HH:mm:ss`, 24-hour clock
pub fn time_of_day(raw: &str) -> Result<String> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(ValidationError::TimeRequired);
    }

    let parts: Vec<&str> = t.split(':').collect();
    let valid = parts.len() == 3
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit()))
        && matches!(parts[0].parse::<u8>(), Ok(h) if h < 24)
        && matches!(parts[1].parse::<u8>(), Ok(m) if m < 60)
        && matches!(parts[2].parse::<u8>(), Ok(s) if s < 60);

    if !valid {
        return Err(ValidationError::InvalidTimeOfDay);
    }
    Ok(t.to_string())
}

/// Parse `name:value:unit` ingredient rows.
///
/// Rows missing any part are dropped. Numeric values are sent as numbers.
pub fn composition(rows: &[String]) -> Vec<Composition> {
    rows.iter()
        .filter_map(|row| {
            let mut parts = row.rsplitn(3, ':');
            let unit = parts.next()?.trim();
            let value = parts.next()?.trim();
            let name = parts.next()?.trim();
            if name.is_empty() || value.is_empty() || unit.is_empty() {
                log::warn!("Skipping incomplete composition row: {}", row);
                return None;
            }
            Some(Composition {
                name: name.to_string(),
                strength_value: StrengthValue::from(value),
                strength_unit: unit.to_string(),
            })
        })
        .collect()
}

/// Optional text fields are trimmed and dropped when blank
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Fields for a new medicine as entered by the user
#[derive(Debug, Default)]
pub struct MedicineInput<'a> {
    pub name: &'a str,
    pub quantity: i64,
    pub expiry_date: &'a str,
    pub dosage: Option<&'a str>,
    pub category: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub form: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub composition: &'a [String],
}

/// Checks run in order: name, expiry, quantity
pub fn medicine_create(input: &MedicineInput<'_>) -> Result<MedicineCreateRequest> {
    let name = name(input.name)?;
    let expiry_date = expiry_date(input.expiry_date)?;
    let quantity = quantity(input.quantity)?;
    let composition = composition(input.composition);

    Ok(MedicineCreateRequest {
        name,
        quantity,
        expiry_date,
        image_url: optional_text(input.image_url),
        dosage: optional_text(input.dosage),
        category: optional_text(input.category),
        notes: optional_text(input.notes),
        composition: (!composition.is_empty()).then_some(composition),
        form: optional_text(input.form),
    })
}

/// Partial medicine edit; only the provided fields are checked and sent
#[derive(Debug, Default)]
pub struct MedicinePatch<'a> {
    pub name: Option<&'a str>,
    pub quantity: Option<i64>,
    pub expiry_date: Option<&'a str>,
    pub dosage: Option<&'a str>,
    pub category: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub form: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub composition: &'a [String],
}

pub fn medicine_update(patch: &MedicinePatch<'_>) -> Result<MedicineUpdateRequest> {
    let composition = composition(patch.composition);

    let request = MedicineUpdateRequest {
        name: patch.name.map(name).transpose()?,
        expiry_date: patch.expiry_date.map(expiry_date).transpose()?,
        quantity: patch.quantity.map(quantity).transpose()?,
        image_url: optional_text(patch.image_url),
        dosage: optional_text(patch.dosage),
        category: optional_text(patch.category),
        notes: optional_text(patch.notes),
        composition: (!composition.is_empty()).then_some(composition),
        form: optional_text(patch.form),
    };

    if request.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }
    Ok(request)
}

pub fn schedule_update(request: ScheduleUpdateRequest) -> Result<ScheduleUpdateRequest> {
    let request = ScheduleUpdateRequest {
        time_of_day: request.time_of_day.as_deref().map(time_of_day).transpose()?,
        ..request
    };
    if request.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::Frequency;

    #[test]
    fn test_login_requires_email_and_password() {
        assert_eq!(login("  ", "x").unwrap_err(), ValidationError::EmailRequired);
        assert_eq!(
            login("a@b.c", "").unwrap_err(),
            ValidationError::PasswordRequired
        );
        assert_eq!(login(" a@b.c ", "x").unwrap().email, "a@b.c");
    }

    #[test]
    fn test_register_rules_in_order() {
        assert_eq!(
            register("", "short", "other").unwrap_err(),
            ValidationError::EmailRequired
        );
        assert_eq!(
            register("a@b.c", "short", "other").unwrap_err(),
            ValidationError::PasswordTooShort
        );
        assert_eq!(
            register("a@b.c", "secret1", "secret2").unwrap_err(),
            ValidationError::PasswordMismatch
        );
        assert!(register("a@b.c", "secret1", "secret1").is_ok());
    }

    #[test]
    fn test_forgot_password_message() {
        let err = forgot_password("a@b.c", "abc", "abc").unwrap_err();
        assert_eq!(err.to_string(), "New password must be at least 6 characters.");

        let req = forgot_password("a@b.c", "newpass", "newpass").unwrap();
        assert_eq!(req.new_password, "newpass");
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert_eq!(quantity(0).unwrap_err(), ValidationError::InvalidQuantity);
        assert_eq!(quantity(-3).unwrap_err(), ValidationError::InvalidQuantity);
        assert_eq!(quantity(i64::MAX).unwrap_err(), ValidationError::InvalidQuantity);
        assert_eq!(quantity(12).unwrap(), 12);
    }

    #[test]
    fn test_expiry_date() {
        assert_eq!(expiry_date("").unwrap_err(), ValidationError::ExpiryRequired);
        assert_eq!(
            expiry_date("05/01/2027").unwrap_err(),
            ValidationError::InvalidExpiry
        );
        assert_eq!(expiry_date("2027-05-01").unwrap(), "2027-05-01");
        assert_eq!(expiry_date("2027-05-01T00:00:00Z").unwrap(), "2027-05-01");
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(time_of_day("08:00:00").unwrap(), "08:00:00");
        assert_eq!(time_of_day(" 23:59:59 ").unwrap(), "23:59:59");
        assert_eq!(time_of_day("").unwrap_err(), ValidationError::TimeRequired);
        for bad in ["8:00:00", "24:00:00", "12:60:00", "12:00", "12:00:00:00", "ab:cd:ef"] {
            assert_eq!(
                time_of_day(bad).unwrap_err(),
                ValidationError::InvalidTimeOfDay,
                "{bad}"
            );
        }
    }

    #[test]
    fn test_composition_rows() {
        let rows = vec![
            "Ibuprofen:200:mg".to_string(),
            "Extract:trace:n/a".to_string(),
            "Missing::mg".to_string(),
            "garbage".to_string(),
        ];
        let parsed = composition(&rows);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].strength_value, StrengthValue::Number(200.0));
        assert_eq!(parsed[1].strength_value, StrengthValue::Text("trace".into()));
        assert_eq!(parsed[1].strength_unit, "n/a");
    }

    #[test]
    fn test_medicine_create_checks_name_then_expiry_then_quantity() {
        let input = MedicineInput {
            name: " ",
            quantity: 0,
            expiry_date: "",
            ..Default::default()
        };
        assert_eq!(
            medicine_create(&input).unwrap_err(),
            ValidationError::NameRequired
        );

        let input = MedicineInput {
            name: "Ibuprofen",
            ..input
        };
        assert_eq!(
            medicine_create(&input).unwrap_err(),
            ValidationError::ExpiryRequired
        );

        let input = MedicineInput {
            expiry_date: "2027-05-01",
            ..input
        };
        assert_eq!(
            medicine_create(&input).unwrap_err(),
            ValidationError::InvalidQuantity
        );

        let input = MedicineInput {
            quantity: 10,
            dosage: Some("  "),
            ..input
        };
        let req = medicine_create(&input).unwrap();
        assert_eq!(req.quantity, 10);
        assert!(req.dosage.is_none());
        assert!(req.composition.is_none());
    }

    #[test]
    fn test_medicine_update() {
        assert_eq!(
            medicine_update(&MedicinePatch::default()).unwrap_err(),
            ValidationError::EmptyUpdate
        );
        assert_eq!(
            medicine_update(&MedicinePatch {
                quantity: Some(0),
                ..Default::default()
            })
            .unwrap_err(),
            ValidationError::InvalidQuantity
        );

        let req = medicine_update(&MedicinePatch {
            notes: Some("after food"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(req.notes.as_deref(), Some("after food"));
        assert!(req.name.is_none());
    }

    #[test]
    fn test_schedule_update() {
        assert_eq!(
            schedule_update(ScheduleUpdateRequest::default()).unwrap_err(),
            ValidationError::EmptyUpdate
        );
        assert_eq!(
            schedule_update(ScheduleUpdateRequest {
                time_of_day: Some("7:00".into()),
                ..Default::default()
            })
            .unwrap_err(),
            ValidationError::InvalidTimeOfDay
        );
        let req = schedule_update(ScheduleUpdateRequest {
            frequency: Some(Frequency::Weekly),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(req.frequency, Some(Frequency::Weekly));
    }
}
