//! Medicine commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, run_get_command, run_list_command};
use crate::cli::{CommandContext, MedicineFieldArgs};
use crate::client::models::{Medicine, MedicineUpdateRequest};
use crate::client::{MedTrackClient, MedicineApi};
use crate::error::{Result, ValidationError};
use crate::expiry::{self, ExpiryStatus};
use crate::models::{MedicineDetail, MedicineDisplay};
use crate::output::{Formattable, Record};
use crate::validation::{self, MedicineInput, MedicinePatch};

const MEDICINES_PATH: &str = "/app/medicines";

fn profile_medicines_path(profile_id: &str) -> String {
    format!("/app/profiles/{}/medicines", profile_id)
}

/// Upload `--image` when given; otherwise pass `--image-url` through
async fn resolve_image(
    client: &MedTrackClient,
    fields: &MedicineFieldArgs,
) -> Result<Option<String>> {
    match &fields.image {
        Some(path) => {
            let url = client.upload_medicine_image(path).await?;
            log::debug!("Uploaded {} to {}", path.display(), url);
            Ok(Some(url))
        }
        None => Ok(fields.image_url.clone()),
    }
}

/// Stock and expiry warnings after a change, on stderr
fn print_warnings(medicine: &Medicine) {
    if medicine.is_low_stock() {
        eprintln!(
            "{} Low stock: {} left of {}",
            "⚠".yellow(),
            medicine.quantity,
            medicine.name
        );
    }
    match expiry::medicine_status(medicine) {
        ExpiryStatus::Expired => eprintln!("{} {} has expired", "⚠".red(), medicine.name),
        ExpiryStatus::ExpiringSoon(days) => eprintln!(
            "{} {} expires in {} day(s)",
            "⚠".yellow(),
            medicine.name,
            days
        ),
        _ => {}
    }
}

pub async fn list(opts: &GlobalOptions, profile: Option<&str>) -> Result<()> {
    let location = profile
        .map(profile_medicines_path)
        .unwrap_or_else(|| MEDICINES_PATH.to_string());

    run_list_command::<Medicine, MedicineDisplay, _, _>(
        opts,
        &location,
        "medicines",
        |client| async move {
            match profile {
                Some(profile_id) => client.list_profile_medicines(profile_id).await,
                None => client.list_medicines().await,
            }
        },
    )
    .await
}

pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    run_get_command::<Medicine, MedicineDetail, _, _>(opts, MEDICINES_PATH, |client| async move {
        client.get_medicine(id).await
    })
    .await
}

pub async fn create(
    opts: &GlobalOptions,
    profile_id: &str,
    name: &str,
    quantity: i64,
    expiry_date: &str,
    fields: &MedicineFieldArgs,
) -> Result<()> {
    let input = MedicineInput {
        name,
        quantity,
        expiry_date,
        dosage: fields.dosage.as_deref(),
        category: fields.category.as_deref(),
        notes: fields.notes.as_deref(),
        form: fields.form.as_deref(),
        image_url: None,
        composition: &fields.composition,
    };
    let mut request = validation::medicine_create(&input)?;

    let ctx = CommandContext::authenticated(opts, &profile_medicines_path(profile_id))?;
    request.image_url = resolve_image(&ctx.client, fields).await?;

    let medicine = ctx.client.create_medicine(profile_id, &request).await?;
    print_warnings(&medicine);
    Record(MedicineDetail::from(medicine)).print(ctx.format)
}

pub async fn update(
    opts: &GlobalOptions,
    id: &str,
    name: Option<&str>,
    quantity: Option<i64>,
    expiry_date: Option<&str>,
    fields: &MedicineFieldArgs,
) -> Result<()> {
    let patch = MedicinePatch {
        name,
        quantity,
        expiry_date,
        dosage: fields.dosage.as_deref(),
        category: fields.category.as_deref(),
        notes: fields.notes.as_deref(),
        form: fields.form.as_deref(),
        image_url: fields.image_url.as_deref(),
        composition: &fields.composition,
    };
    let mut request = match validation::medicine_update(&patch) {
        // A new image on its own is a valid edit
        Err(ValidationError::EmptyUpdate) if fields.image.is_some() => {
            MedicineUpdateRequest::default()
        }
        other => other?,
    };

    let ctx = CommandContext::authenticated(opts, MEDICINES_PATH)?;
    if fields.image.is_some() {
        request.image_url = resolve_image(&ctx.client, fields).await?;
    }

    let medicine = ctx.client.update_medicine(id, &request).await?;
    print_warnings(&medicine);
    Record(MedicineDetail::from(medicine)).print(ctx.format)
}

pub async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::authenticated(opts, MEDICINES_PATH)?;
    if !confirm_delete(&format!("medicine {}", id), yes)? {
        println!("Cancelled");
        return Ok(());
    }

    ctx.client.delete_medicine(id).await?;
    println!("{} Deleted medicine {}", "✓".green(), id);
    Ok(())
}

pub async fn take_dose(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::authenticated(opts, MEDICINES_PATH)?;
    let medicine = ctx.client.take_dose(id).await?;

    println!(
        "{} Dose recorded for {} ({} left)",
        "✓".green(),
        medicine.name.bold(),
        medicine.quantity
    );
    print_warnings(&medicine);
    Ok(())
}

pub async fn upload_image(opts: &GlobalOptions, file: &std::path::Path) -> Result<()> {
    let ctx = CommandContext::authenticated(opts, MEDICINES_PATH)?;
    let url = ctx.client.upload_medicine_image(file).await?;
    println!("{}", url);
    Ok(())
}
