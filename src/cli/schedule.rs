//! Dosing schedule commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{confirm_delete, run_get_command, run_list_command};
use crate::client::ScheduleApi;
use crate::client::models::{Frequency, Schedule, ScheduleCreateRequest, ScheduleUpdateRequest};
use crate::error::Result;
use crate::models::ScheduleDisplay;
use crate::output::{Formattable, Record};
use crate::validation;

const SCHEDULES_PATH: &str = "/app/schedules";

pub async fn list(
    opts: &GlobalOptions,
    medicine: Option<&str>,
    profile: Option<&str>,
) -> Result<()> {
    run_list_command::<Schedule, ScheduleDisplay, _, _>(
        opts,
        SCHEDULES_PATH,
        "schedules",
        |client| async move {
            match (medicine, profile) {
                (Some(medicine_id), _) => client.list_medicine_schedules(medicine_id).await,
                (None, Some(profile_id)) => client.list_profile_schedules(profile_id).await,
                (None, None) => client.list_schedules().await,
            }
        },
    )
    .await
}

pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    run_get_command::<Schedule, ScheduleDisplay, _, _>(opts, SCHEDULES_PATH, |client| async move {
        client.get_schedule(id).await
    })
    .await
}

pub async fn create(
    opts: &GlobalOptions,
    medicine_id: &str,
    time: &str,
    frequency: Frequency,
    inactive: bool,
) -> Result<()> {
    let request = ScheduleCreateRequest {
        time_of_day: validation::time_of_day(time)?,
        frequency,
        is_active: !inactive,
    };
    let ctx = CommandContext::authenticated(opts, SCHEDULES_PATH)?;

    let schedule = ctx.client.create_schedule(medicine_id, &request).await?;
    Record(ScheduleDisplay::from(schedule)).print(ctx.format)
}

pub async fn update(opts: &GlobalOptions, id: &str, request: ScheduleUpdateRequest) -> Result<()> {
    let request = validation::schedule_update(request)?;
    let ctx = CommandContext::authenticated(opts, SCHEDULES_PATH)?;

    let schedule = ctx.client.update_schedule(id, &request).await?;
    Record(ScheduleDisplay::from(schedule)).print(ctx.format)
}

pub async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::authenticated(opts, SCHEDULES_PATH)?;
    if !confirm_delete(&format!("schedule {}", id), yes)? {
        println!("Cancelled");
        return Ok(());
    }

    ctx.client.delete_schedule(id).await?;
    println!("{} Deleted schedule {}", "✓".green(), id);
    Ok(())
}
