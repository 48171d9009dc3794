//! Human-oriented `key: value` output

use colored::Colorize;
use tabled::Tabled;

use super::table::EMPTY_MESSAGE;

/// One record as aligned `HEADER  value` lines; empty values are skipped
pub fn format_record<T: Tabled>(record: &T) -> String {
    let headers = T::headers();
    let width = headers.iter().map(|h| h.len()).max().unwrap_or(0);

    headers
        .iter()
        .zip(record.fields())
        .filter(|(_, value)| !value.is_empty())
        .map(|(header, value)| {
            let label = format!("{:<width$}", header, width = width);
            format!("{}  {}", label.bold(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Records separated by blank lines
pub fn format_records<T: Tabled>(records: &[T]) -> String {
    if records.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    records
        .iter()
        .map(format_record)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "NAME")]
        name: String,
        #[tabled(rename = "NOTES")]
        notes: String,
    }

    #[test]
    fn test_record_skips_empty_fields() {
        colored::control::set_override(false);
        let out = format_record(&Row {
            name: "Ibuprofen".to_string(),
            notes: String::new(),
        });

        assert_eq!(out, "NAME   Ibuprofen");
    }

    #[test]
    fn test_records_are_separated() {
        colored::control::set_override(false);
        let rows = vec![
            Row {
                name: "A".to_string(),
                notes: "x".to_string(),
            },
            Row {
                name: "B".to_string(),
                notes: String::new(),
            },
        ];

        let out = format_records(&rows);
        assert!(out.contains("NOTES  x\n\nNAME   B"));
        assert_eq!(format_records::<Row>(&[]), EMPTY_MESSAGE);
    }
}
