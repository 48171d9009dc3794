//! Common display helpers

use chrono::{DateTime, NaiveDateTime, Utc};

pub const CHECKMARK: &str = "\u{2713}";

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Date part of a server timestamp, with or without a zone suffix
pub fn format_date(timestamp: Option<&str>) -> String {
    let Some(ts) = timestamp else {
        return String::new();
    };

    if let Ok(dt) = ts.parse::<DateTime<Utc>>() {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }

    ts.to_string()
}

pub fn or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

pub fn check(flag: bool) -> String {
    if flag { CHECKMARK.to_string() } else { String::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("take after breakfast", 10), "take af...");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-01-15T10:30:00Z")), "2025-01-15");
        assert_eq!(format_date(Some("2025-01-15T10:30:00.123")), "2025-01-15");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), "");
    }
}
