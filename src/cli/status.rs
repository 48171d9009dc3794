//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::session::{StorageTier, TokenClaims};
use crate::error::Result;

/// Show where configuration lives and whether a credential is stored
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, "/app/dashboard")?;

    println!("{}\n", "MedTrack Status".bold());
    println!(
        "Config file: {}",
        ctx.config_path.display().to_string().cyan()
    );
    println!("API URL:     {}", ctx.client.base_url().cyan());
    println!("Theme:       {}", ctx.config.preferences.theme);
    println!();

    match ctx.client.credentials().lookup_with_tier() {
        Some((token, tier)) => {
            let place = match tier {
                StorageTier::Durable => "remembered on this device",
                StorageTier::Session => "this login session only",
            };
            println!("{} Signed in ({})", "✓".green(), place);

            if let Some(claims) = TokenClaims::peek(&token) {
                if let Some(sub) = claims.sub.as_deref() {
                    println!("  Account: {}", sub.bold());
                }
                if let Some(expires) = claims.expires_at() {
                    let remaining = expires.signed_duration_since(Utc::now());
                    if remaining.num_seconds() <= 0 {
                        println!(
                            "{} Credential expired (the next request will ask you to sign in)",
                            "⚠".yellow()
                        );
                    } else {
                        println!(
                            "  Expires in {}h {}m",
                            remaining.num_hours(),
                            remaining.num_minutes() % 60
                        );
                    }
                }
            }
        }
        None => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'medtrack login <EMAIL>' to sign in");
        }
    }

    Ok(())
}
