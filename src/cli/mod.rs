//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

use crate::client::models::Frequency;
use crate::config::ThemeMode;

pub mod args;
pub mod auth;
pub mod catalog;
pub mod completions;
pub mod context;
pub mod handlers;
pub mod medicine;
pub mod notify;
pub mod profile;
pub mod schedule;
pub mod status;
pub mod theme;

pub use args::OutputFormat;
pub use context::CommandContext;

/// MedTrack CLI - keep track of household medicines, stock and dosing
#[derive(Parser, Debug)]
#[command(name = "medtrack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, pretty, json)
    #[arg(
        long,
        global = true,
        env = "MEDTRACK_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "MEDTRACK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "MEDTRACK_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MEDTRACK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        /// Account email
        email: String,

        /// Password (prompted when omitted)
        #[arg(long, env = "MEDTRACK_PASSWORD", hide_env = true)]
        password: Option<String>,

        /// Keep the credential only for this login session
        #[arg(long)]
        no_remember: bool,
    },

    /// Create an account and sign in
    Register {
        /// Account email
        email: String,

        /// Password (prompted twice when omitted)
        #[arg(long, env = "MEDTRACK_PASSWORD", hide_env = true)]
        password: Option<String>,

        /// Keep the credential only for this login session
        #[arg(long)]
        no_remember: bool,
    },

    /// Reset a forgotten password
    ForgotPassword {
        /// Account email
        email: String,

        /// New password (prompted twice when omitted)
        #[arg(long)]
        new_password: Option<String>,
    },

    /// Forget the stored credential
    Logout,

    /// Show sign-in and configuration status
    Status,

    /// Check that the API is reachable
    Health,

    /// Register a push notification device token
    FcmToken {
        /// Device token issued by the push provider
        token: String,
    },

    /// Manage profiles
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Manage medicines
    #[command(subcommand)]
    Medicine(MedicineCommands),

    /// Manage dosing schedules
    #[command(subcommand)]
    Schedule(ScheduleCommands),

    /// Browse and curate the global medicine catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Show or change the theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   medtrack completion bash > /etc/bash_completion.d/medtrack
  zsh:    medtrack completion zsh > \"${fpath[1]}/_medtrack\"
  fish:   medtrack completion fish > ~/.config/fish/completions/medtrack.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Skip the delete confirmation prompt
#[derive(Debug, Clone, Args, Default)]
pub struct ConfirmArgs {
    /// Do not ask for confirmation
    #[arg(long, short)]
    pub yes: bool,
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List your profiles
    List,

    /// Show one profile
    Get {
        /// Profile ID
        id: String,
    },

    /// Create a profile
    Create {
        /// Display name
        name: String,
    },

    /// Rename a profile
    Update {
        /// Profile ID
        id: String,

        /// New display name
        name: String,
    },

    /// Delete a profile
    Delete {
        /// Profile ID
        id: String,

        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

/// Medicine fields shared by create and update
#[derive(Debug, Clone, Args, Default)]
pub struct MedicineFieldArgs {
    /// Dosage instructions, e.g. "1 tablet"
    #[arg(long)]
    pub dosage: Option<String>,

    /// Category, e.g. "Pain Relief"
    #[arg(long)]
    pub category: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Form, e.g. tablet, syrup
    #[arg(long)]
    pub form: Option<String>,

    /// Image file to upload and attach
    #[arg(long, conflicts_with = "image_url")]
    pub image: Option<std::path::PathBuf>,

    /// Already uploaded image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Ingredient as NAME:VALUE:UNIT, e.g. Ibuprofen:200:mg (repeatable)
    #[arg(long = "composition", value_name = "NAME:VALUE:UNIT")]
    pub composition: Vec<String>,
}

/// Medicine subcommands
#[derive(Subcommand, Debug)]
pub enum MedicineCommands {
    /// List medicines with expiry and stock status
    List {
        /// Only medicines of this profile
        #[arg(long)]
        profile: Option<String>,
    },

    /// Show one medicine
    Get {
        /// Medicine ID
        id: String,
    },

    /// Add a medicine to a profile
    Create {
        /// Owning profile ID
        #[arg(long)]
        profile: String,

        /// Medicine name
        #[arg(long, default_value = "")]
        name: String,

        /// Units in stock
        #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
        quantity: i64,

        /// Expiry date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        expiry: String,

        #[command(flatten)]
        fields: MedicineFieldArgs,
    },

    /// Edit a medicine; only the given fields change
    Update {
        /// Medicine ID
        id: String,

        /// Medicine name
        #[arg(long)]
        name: Option<String>,

        /// Units in stock
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// Expiry date (YYYY-MM-DD)
        #[arg(long)]
        expiry: Option<String>,

        #[command(flatten)]
        fields: MedicineFieldArgs,
    },

    /// Delete a medicine
    Delete {
        /// Medicine ID
        id: String,

        #[command(flatten)]
        confirm: ConfirmArgs,
    },

    /// Record a dose taken
    TakeDose {
        /// Medicine ID
        id: String,
    },

    /// Upload a medicine image and print its URL
    UploadImage {
        /// Image file
        file: std::path::PathBuf,
    },
}

/// Schedule subcommands
#[derive(Subcommand, Debug)]
pub enum ScheduleCommands {
    /// List schedules, optionally for one medicine or profile
    List {
        /// Only schedules of this medicine
        #[arg(long, conflicts_with = "profile")]
        medicine: Option<String>,

        /// Only schedules of this profile
        #[arg(long)]
        profile: Option<String>,
    },

    /// Show one schedule
    Get {
        /// Schedule ID
        id: String,
    },

    /// Add a schedule to a medicine
    Create {
        /// Medicine ID
        #[arg(long)]
        medicine: String,

        /// Time of day (HH:mm:ss)
        #[arg(long, default_value = crate::validation::DEFAULT_TIME_OF_DAY)]
        time: String,

        /// How often the schedule fires
        #[arg(long, value_enum, default_value_t = Frequency::Daily)]
        frequency: Frequency,

        /// Create the schedule paused
        #[arg(long)]
        inactive: bool,
    },

    /// Edit a schedule; only the given fields change
    Update {
        /// Schedule ID
        id: String,

        /// Time of day (HH:mm:ss)
        #[arg(long)]
        time: Option<String>,

        /// How often the schedule fires
        #[arg(long, value_enum)]
        frequency: Option<Frequency>,

        /// Enable or pause the schedule
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a schedule
    Delete {
        /// Schedule ID
        id: String,

        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

/// Catalog entry fields shared by create and update
#[derive(Debug, Clone, Args, Default)]
pub struct CatalogFieldArgs {
    #[arg(long)]
    pub brand_name: Option<String>,

    #[arg(long)]
    pub generic_name: Option<String>,

    #[arg(long)]
    pub dosage_form: Option<String>,

    #[arg(long)]
    pub strength: Option<String>,

    #[arg(long)]
    pub manufacturer: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub indications: Option<Vec<String>>,

    /// Comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub contraindications: Option<Vec<String>>,

    /// Comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub side_effects: Option<Vec<String>>,

    /// Comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub warnings: Option<Vec<String>>,

    /// Comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub interactions: Option<Vec<String>>,

    #[arg(long)]
    pub storage_instructions: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub atc_code: Option<String>,

    /// FDA approval date (YYYY-MM-DD)
    #[arg(long)]
    pub fda_approval_date: Option<String>,
}

/// Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List every catalog entry
    List,

    /// Show one catalog entry
    Get {
        /// Catalog entry ID
        id: String,
    },

    /// Search the catalog by name
    Search {
        /// Name or part of a name
        name: String,
    },

    /// List entries in a category
    Category {
        /// Category name
        category: String,
    },

    /// Add a catalog entry
    Create {
        /// Medicine name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        fields: CatalogFieldArgs,
    },

    /// Edit a catalog entry; only the given fields change
    Update {
        /// Catalog entry ID
        id: String,

        /// Medicine name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: CatalogFieldArgs,
    },

    /// Delete a catalog entry
    Delete {
        /// Catalog entry ID
        id: String,

        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

/// Theme subcommands
#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,

    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly
    Set {
        #[arg(value_enum)]
        mode: ThemeMode,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_medicine_create() {
        let cli = Cli::try_parse_from([
            "medtrack",
            "medicine",
            "create",
            "--profile",
            "p1",
            "--name",
            "Ibuprofen",
            "--quantity",
            "-2",
            "--expiry",
            "2027-05-01",
            "--composition",
            "Ibuprofen:200:mg",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Medicine(MedicineCommands::Create {
                quantity, fields, ..
            }) => {
                assert_eq!(quantity, -2);
                assert_eq!(fields.composition, vec!["Ibuprofen:200:mg"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_schedule_defaults() {
        let cli =
            Cli::try_parse_from(["medtrack", "schedule", "create", "--medicine", "m1"]).unwrap();

        match cli.command {
            Commands::Schedule(ScheduleCommands::Create {
                time,
                frequency,
                inactive,
                ..
            }) => {
                assert_eq!(time, "08:00:00");
                assert_eq!(frequency, Frequency::Daily);
                assert!(!inactive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_schedule_list_filters_conflict() {
        let result = Cli::try_parse_from([
            "medtrack",
            "schedule",
            "list",
            "--medicine",
            "m1",
            "--profile",
            "p1",
        ]);
        assert!(result.is_err());
    }
}
