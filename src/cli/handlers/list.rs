//! Generic list/get command handlers
//!
//! Most read commands follow the same flow:
//! 1. Create an authenticated command context
//! 2. Fetch data through the client
//! 3. Convert to a display type
//! 4. Print output

use std::future::Future;

use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::MedTrackClient;
use crate::error::Result;
use crate::output::{Formattable, Record};

/// Run a list command: fetch → convert → print.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Profile`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Profile, ProfileDisplay, _, _>(
///     opts,
///     "/app/profiles",
///     "profiles",
///     |client| async move { client.list_profiles().await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    location: &str,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(MedTrackClient) -> Fut,
{
    let ctx = CommandContext::authenticated(opts, location)?;

    debug!("Fetching {}", resource_name);
    let items = fetcher(ctx.client.clone()).await?;
    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)
}

/// Run a single-record command: fetch → convert → print as one record
pub async fn run_get_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    location: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<T>>,
    F: FnOnce(MedTrackClient) -> Fut,
{
    let ctx = CommandContext::authenticated(opts, location)?;
    let item = fetcher(ctx.client.clone()).await?;
    Record(D::from(item)).print(ctx.format)
}

/// Ask before deleting unless `--yes` was given
pub fn confirm_delete(what: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete {}?", what))
        .default(false)
        .interact()?;

    Ok(confirmed)
}
