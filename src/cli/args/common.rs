//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per record (default)
    #[default]
    Table,
    /// Pretty format - one `field value` block per record
    Pretty,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name stored in the config file
    pub fn from_config(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "pretty" => Some(OutputFormat::Pretty),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
