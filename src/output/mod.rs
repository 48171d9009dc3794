//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod pretty;
pub mod table;

/// Types that can be rendered in every [`OutputFormat`]
pub trait Formattable {
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Pretty => Ok(pretty::format_records(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// A single record, rendered as an object rather than a one-element list
pub struct Record<T>(pub T);

impl<T: Tabled + Serialize> Formattable for Record<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(std::slice::from_ref(&self.0))),
            OutputFormat::Pretty => Ok(pretty::format_record(&self.0)),
            OutputFormat::Json => Ok(json::format_json(&self.0)?),
        }
    }
}
