//! Sign-in, registration and account commands

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::AuthApi;
use crate::client::interceptor::LOGIN_PATH;
use crate::error::Result;
use crate::validation;

const REGISTER_PATH: &str = "/register";
const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
const DASHBOARD_PATH: &str = "/app/dashboard";
const SETTINGS_PATH: &str = "/app/settings";

fn prompt_password(prompt: &str) -> Result<String> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(password)
}

/// Password and confirmation: a flag value counts as both, otherwise ask twice
fn password_pair(given: Option<String>, prompt: &str) -> Result<(String, String)> {
    match given {
        Some(password) => Ok((password.clone(), password)),
        None => {
            let password = prompt_password(prompt)?;
            let confirm = prompt_password("Confirm password")?;
            Ok((password, confirm))
        }
    }
}

fn storage_note(remember: bool) -> &'static str {
    if remember {
        "remembered on this device"
    } else {
        "kept for this login session only"
    }
}

pub async fn login(
    opts: &GlobalOptions,
    email: &str,
    password: Option<String>,
    no_remember: bool,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password("Password")?,
    };
    let request = validation::login(email, &password)?;

    let ctx = CommandContext::new(opts, LOGIN_PATH)?;
    let remember = !no_remember;
    let response = ctx.client.login(&request, remember).await?;

    println!("{} Signed in as {}", "✓".green(), response.email.bold());
    println!("  Credential {}", storage_note(remember).dimmed());
    Ok(())
}

pub async fn register(
    opts: &GlobalOptions,
    email: &str,
    password: Option<String>,
    no_remember: bool,
) -> Result<()> {
    let (password, confirm) = password_pair(password, "Password")?;
    let request = validation::register(email, &password, &confirm)?;

    let ctx = CommandContext::new(opts, REGISTER_PATH)?;
    let remember = !no_remember;
    let response = ctx.client.register(&request, remember).await?;

    println!("{} Account created for {}", "✓".green(), response.email.bold());
    println!("  Credential {}", storage_note(remember).dimmed());
    Ok(())
}

pub async fn forgot_password(
    opts: &GlobalOptions,
    email: &str,
    new_password: Option<String>,
) -> Result<()> {
    let (password, confirm) = password_pair(new_password, "New password")?;
    let request = validation::forgot_password(email, &password, &confirm)?;

    let ctx = CommandContext::new(opts, FORGOT_PASSWORD_PATH)?;
    ctx.client.forgot_password(&request).await?;

    println!("{} Password updated", "✓".green());
    println!("  → Run 'medtrack login {}' to sign in", request.email);
    Ok(())
}

pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, DASHBOARD_PATH)?;
    let was_signed_in = ctx.client.credentials().is_authenticated();
    ctx.client.logout()?;

    if was_signed_in {
        println!("{} Signed out", "✓".green());
    } else {
        println!("{} Not signed in", "○".dimmed());
    }
    Ok(())
}

pub async fn fcm_token(opts: &GlobalOptions, token: &str) -> Result<()> {
    let ctx = CommandContext::authenticated(opts, SETTINGS_PATH)?;
    ctx.client.update_fcm_token(token.trim()).await?;

    println!("{} Device registered for reminders", "✓".green());
    Ok(())
}

pub async fn health(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, DASHBOARD_PATH)?;
    let health = ctx.client.health().await?;
    let status = health.status.as_deref().unwrap_or("UNKNOWN");

    if health.is_up() {
        println!("{} {} is {}", "✓".green(), ctx.client.base_url(), status.green());
    } else {
        println!("{} {} is {}", "⚠".yellow(), ctx.client.base_url(), status.yellow());
    }
    Ok(())
}
