//! Expiry classification for medicines

use chrono::{DateTime, NaiveDate, Utc};

use crate::client::models::Medicine;

/// Days ahead of expiry at which a medicine counts as expiring soon
pub const EXPIRING_SOON_DAYS: i64 = 7;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Where a medicine stands relative to its expiry date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    NoExpiry,
    Expired,
    ExpiringSoon(i64),
    Healthy(i64),
}

impl ExpiryStatus {
    pub fn label(&self) -> String {
        match self {
            ExpiryStatus::NoExpiry => "No expiry".to_string(),
            ExpiryStatus::Expired => "Expired".to_string(),
            ExpiryStatus::ExpiringSoon(days) => format!("Expiring in {}d", days),
            ExpiryStatus::Healthy(days) => format!("In {}d", days),
        }
    }
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whole days from `now` until the start of `date` (UTC), rounded up.
///
/// A date later today counts as 0, yesterday as -1.
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = (midnight - now).num_milliseconds();
    -(-millis).div_euclid(MILLIS_PER_DAY)
}

pub fn classify(date: Option<NaiveDate>, now: DateTime<Utc>) -> ExpiryStatus {
    let Some(date) = date else {
        return ExpiryStatus::NoExpiry;
    };

    match days_until(date, now) {
        days if days < 0 => ExpiryStatus::Expired,
        days if days <= EXPIRING_SOON_DAYS => ExpiryStatus::ExpiringSoon(days),
        days => ExpiryStatus::Healthy(days),
    }
}

/// Classify a medicine against the current wall clock
pub fn medicine_status(medicine: &Medicine) -> ExpiryStatus {
    classify(medicine.expiry(), Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = at(2025, 1, 1, 12);
        assert_eq!(days_until(date(2025, 1, 2), now), 1);
        assert_eq!(days_until(date(2025, 1, 1), now), 0);
        assert_eq!(days_until(date(2024, 12, 31), now), -1);
        assert_eq!(days_until(date(2025, 1, 11), now), 10);
    }

    #[test]
    fn test_days_until_at_midnight_is_exact() {
        let now = at(2025, 1, 1, 0);
        assert_eq!(days_until(date(2025, 1, 1), now), 0);
        assert_eq!(days_until(date(2025, 1, 8), now), 7);
    }

    #[test]
    fn test_classification_boundaries() {
        let now = at(2025, 1, 1, 12);

        assert_eq!(classify(None, now), ExpiryStatus::NoExpiry);
        assert_eq!(classify(Some(date(2024, 12, 31)), now), ExpiryStatus::Expired);
        assert_eq!(
            classify(Some(date(2025, 1, 1)), now),
            ExpiryStatus::ExpiringSoon(0)
        );
        assert_eq!(
            classify(Some(date(2025, 1, 8)), now),
            ExpiryStatus::ExpiringSoon(7)
        );
        assert_eq!(classify(Some(date(2025, 1, 9)), now), ExpiryStatus::Healthy(8));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ExpiryStatus::NoExpiry.label(), "No expiry");
        assert_eq!(ExpiryStatus::Expired.label(), "Expired");
        assert_eq!(ExpiryStatus::ExpiringSoon(3).to_string(), "Expiring in 3d");
        assert_eq!(ExpiryStatus::Healthy(40).to_string(), "In 40d");
    }
}
