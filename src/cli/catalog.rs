//! Global medicine catalog commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, run_get_command, run_list_command};
use crate::cli::{CatalogFieldArgs, CommandContext};
use crate::client::CatalogApi;
use crate::client::models::{GlobalMedicine, GlobalMedicineRequest};
use crate::error::Result;
use crate::models::{CatalogDetail, CatalogDisplay};
use crate::output::{Formattable, Record};
use crate::validation::{self, optional_text};

const CATALOG_PATH: &str = "/app/catalog";

/// Build a request from the flags that were given
fn request_from(name: Option<&str>, fields: &CatalogFieldArgs) -> Result<GlobalMedicineRequest> {
    let fda_approval_date = fields
        .fda_approval_date
        .as_deref()
        .map(validation::date)
        .transpose()?;

    Ok(GlobalMedicineRequest {
        name: name.map(validation::name).transpose()?,
        brand_name: optional_text(fields.brand_name.as_deref()),
        generic_name: optional_text(fields.generic_name.as_deref()),
        dosage_form: optional_text(fields.dosage_form.as_deref()),
        strength: optional_text(fields.strength.as_deref()),
        manufacturer: optional_text(fields.manufacturer.as_deref()),
        description: optional_text(fields.description.as_deref()),
        indications: fields.indications.clone(),
        contraindications: fields.contraindications.clone(),
        side_effects: fields.side_effects.clone(),
        warnings: fields.warnings.clone(),
        interactions: fields.interactions.clone(),
        storage_instructions: optional_text(fields.storage_instructions.as_deref()),
        category: optional_text(fields.category.as_deref()),
        atc_code: optional_text(fields.atc_code.as_deref()),
        fda_approval_date,
    })
}

pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<GlobalMedicine, CatalogDisplay, _, _>(
        opts,
        CATALOG_PATH,
        "catalog entries",
        |client| async move { client.list_catalog().await },
    )
    .await
}

pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    run_get_command::<GlobalMedicine, CatalogDetail, _, _>(opts, CATALOG_PATH, |client| async move {
        client.get_catalog_entry(id).await
    })
    .await
}

pub async fn search(opts: &GlobalOptions, name: &str) -> Result<()> {
    run_list_command::<GlobalMedicine, CatalogDisplay, _, _>(
        opts,
        CATALOG_PATH,
        "catalog matches",
        |client| async move { client.search_catalog(name.trim()).await },
    )
    .await
}

pub async fn category(opts: &GlobalOptions, category: &str) -> Result<()> {
    run_list_command::<GlobalMedicine, CatalogDisplay, _, _>(
        opts,
        CATALOG_PATH,
        "catalog entries",
        |client| async move { client.catalog_by_category(category).await },
    )
    .await
}

pub async fn create(opts: &GlobalOptions, name: &str, fields: &CatalogFieldArgs) -> Result<()> {
    let request = request_from(Some(name), fields)?;
    let ctx = CommandContext::authenticated(opts, CATALOG_PATH)?;

    let entry = ctx.client.create_catalog_entry(&request).await?;
    Record(CatalogDetail::from(entry)).print(ctx.format)
}

pub async fn update(
    opts: &GlobalOptions,
    id: &str,
    name: Option<&str>,
    fields: &CatalogFieldArgs,
) -> Result<()> {
    let request = request_from(name, fields)?;
    let ctx = CommandContext::authenticated(opts, CATALOG_PATH)?;

    let entry = ctx.client.update_catalog_entry(id, &request).await?;
    Record(CatalogDetail::from(entry)).print(ctx.format)
}

pub async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::authenticated(opts, CATALOG_PATH)?;
    if !confirm_delete(&format!("catalog entry {}", id), yes)? {
        println!("Cancelled");
        return Ok(());
    }

    ctx.client.delete_catalog_entry(id).await?;
    println!("{} Deleted catalog entry {}", "✓".green(), id);
    Ok(())
}
