//! Theme preference commands
//!
//! The theme lives in the config file next to the API URL and survives
//! sign-out.

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::ThemeMode;
use crate::error::Result;

const SETTINGS_PATH: &str = "/app/settings";

pub fn show(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts, SETTINGS_PATH)?;
    println!("{}", ctx.config.preferences.theme);
    Ok(())
}

pub fn toggle(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts, SETTINGS_PATH)?;
    let mode = ctx.config.preferences.theme.toggled();
    apply(&mut ctx, mode)
}

pub fn set(opts: &GlobalOptions, mode: ThemeMode) -> Result<()> {
    let mut ctx = CommandContext::new(opts, SETTINGS_PATH)?;
    apply(&mut ctx, mode)
}

fn apply(ctx: &mut CommandContext, mode: ThemeMode) -> Result<()> {
    ctx.config.preferences.theme = mode;
    ctx.save_config()?;
    println!("{} Theme set to {}", "✓".green(), mode.to_string().bold());
    Ok(())
}
