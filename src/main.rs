//! MedTrack CLI - household medicine tracking from the terminal

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod expiry;
mod models;
mod output;
mod session;
mod validation;

use cli::args::GlobalOptions;
use cli::{
    CatalogCommands, Cli, Commands, MedicineCommands, ProfileCommands, ScheduleCommands,
    ThemeCommands,
};
use client::models::ScheduleUpdateRequest;
use client::{EventBus, drain};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let events = EventBus::default();
    let mut receiver = events.subscribe();
    let opts = GlobalOptions::from_cli(&cli, events);

    let result = run(cli.command, &opts).await;

    // Notifications first, so a redirect hint precedes the final error line
    cli::notify::show(&drain(&mut receiver));

    if let Err(err) = result {
        if !err.is_published() {
            eprintln!("Error: {}", err);
        }
        std::process::exit(1);
    }
}

/// `warn` by default, `debug` with `--debug`; `RUST_LOG` overrides both
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Login {
            email,
            password,
            no_remember,
        } => cli::auth::login(opts, &email, password, no_remember).await,
        Commands::Register {
            email,
            password,
            no_remember,
        } => cli::auth::register(opts, &email, password, no_remember).await,
        Commands::ForgotPassword {
            email,
            new_password,
        } => cli::auth::forgot_password(opts, &email, new_password).await,
        Commands::Logout => cli::auth::logout(opts),
        Commands::Status => cli::status::run(opts),
        Commands::Health => cli::auth::health(opts).await,
        Commands::FcmToken { token } => cli::auth::fcm_token(opts, &token).await,
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::List => cli::profile::list(opts).await,
            ProfileCommands::Get { id } => cli::profile::get(opts, &id).await,
            ProfileCommands::Create { name } => cli::profile::create(opts, &name).await,
            ProfileCommands::Update { id, name } => cli::profile::update(opts, &id, &name).await,
            ProfileCommands::Delete { id, confirm } => {
                cli::profile::delete(opts, &id, confirm.yes).await
            }
        },
        Commands::Medicine(cmd) => match cmd {
            MedicineCommands::List { profile } => {
                cli::medicine::list(opts, profile.as_deref()).await
            }
            MedicineCommands::Get { id } => cli::medicine::get(opts, &id).await,
            MedicineCommands::Create {
                profile,
                name,
                quantity,
                expiry,
                fields,
            } => cli::medicine::create(opts, &profile, &name, quantity, &expiry, &fields).await,
            MedicineCommands::Update {
                id,
                name,
                quantity,
                expiry,
                fields,
            } => {
                cli::medicine::update(
                    opts,
                    &id,
                    name.as_deref(),
                    quantity,
                    expiry.as_deref(),
                    &fields,
                )
                .await
            }
            MedicineCommands::Delete { id, confirm } => {
                cli::medicine::delete(opts, &id, confirm.yes).await
            }
            MedicineCommands::TakeDose { id } => cli::medicine::take_dose(opts, &id).await,
            MedicineCommands::UploadImage { file } => {
                cli::medicine::upload_image(opts, &file).await
            }
        },
        Commands::Schedule(cmd) => match cmd {
            ScheduleCommands::List { medicine, profile } => {
                cli::schedule::list(opts, medicine.as_deref(), profile.as_deref()).await
            }
            ScheduleCommands::Get { id } => cli::schedule::get(opts, &id).await,
            ScheduleCommands::Create {
                medicine,
                time,
                frequency,
                inactive,
            } => cli::schedule::create(opts, &medicine, &time, frequency, inactive).await,
            ScheduleCommands::Update {
                id,
                time,
                frequency,
                active,
            } => {
                let request = ScheduleUpdateRequest {
                    time_of_day: time,
                    frequency,
                    is_active: active,
                };
                cli::schedule::update(opts, &id, request).await
            }
            ScheduleCommands::Delete { id, confirm } => {
                cli::schedule::delete(opts, &id, confirm.yes).await
            }
        },
        Commands::Catalog(cmd) => match cmd {
            CatalogCommands::List => cli::catalog::list(opts).await,
            CatalogCommands::Get { id } => cli::catalog::get(opts, &id).await,
            CatalogCommands::Search { name } => cli::catalog::search(opts, &name).await,
            CatalogCommands::Category { category } => {
                cli::catalog::category(opts, &category).await
            }
            CatalogCommands::Create { name, fields } => {
                cli::catalog::create(opts, &name, &fields).await
            }
            CatalogCommands::Update { id, name, fields } => {
                cli::catalog::update(opts, &id, name.as_deref(), &fields).await
            }
            CatalogCommands::Delete { id, confirm } => {
                cli::catalog::delete(opts, &id, confirm.yes).await
            }
        },
        Commands::Theme(cmd) => match cmd {
            ThemeCommands::Show => cli::theme::show(opts),
            ThemeCommands::Toggle => cli::theme::toggle(opts),
            ThemeCommands::Set { mode } => cli::theme::set(opts, mode),
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
