//! Profile commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, run_get_command, run_list_command};
use crate::client::ProfileApi;
use crate::client::models::Profile;
use crate::error::Result;
use crate::models::ProfileDisplay;
use crate::output::{Formattable, Record};
use crate::validation;

const PROFILES_PATH: &str = "/app/profiles";

pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Profile, ProfileDisplay, _, _>(
        opts,
        PROFILES_PATH,
        "profiles",
        |client| async move { client.list_profiles().await },
    )
    .await
}

pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let location = format!("{}/{}", PROFILES_PATH, id);
    run_get_command::<Profile, ProfileDisplay, _, _>(opts, &location, |client| async move {
        client.get_profile(id).await
    })
    .await
}

pub async fn create(opts: &GlobalOptions, name: &str) -> Result<()> {
    let name = validation::name(name)?;
    let ctx = CommandContext::authenticated(opts, PROFILES_PATH)?;

    let profile = ctx.client.create_profile(&name).await?;
    Record(ProfileDisplay::from(profile)).print(ctx.format)
}

pub async fn update(opts: &GlobalOptions, id: &str, name: &str) -> Result<()> {
    let name = validation::name(name)?;
    let ctx = CommandContext::authenticated(opts, &format!("{}/{}", PROFILES_PATH, id))?;

    let profile = ctx.client.update_profile(id, &name).await?;
    Record(ProfileDisplay::from(profile)).print(ctx.format)
}

pub async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::authenticated(opts, PROFILES_PATH)?;
    if !confirm_delete(&format!("profile {}", id), yes)? {
        println!("Cancelled");
        return Ok(());
    }

    ctx.client.delete_profile(id).await?;
    println!("{} Deleted profile {}", "✓".green(), id);
    Ok(())
}
