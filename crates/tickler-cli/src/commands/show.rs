use anyhow::Result;
use chrono::NaiveDate;
use tickler_core::date::format_date;
use tickler_core::error::CoreError;
use tickler_core::repository::TaskRepository;

use crate::cli::ShowCommand;
use crate::views::{json, table::display_task_details};

pub async fn show_task(repo: &impl TaskRepository, command: ShowCommand, today: NaiveDate) -> Result<()> {
    let task = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    if command.json {
        println!("{}", json::task(&task)?);
    } else {
        display_task_details(&task, &format_date(today));
    }
    Ok(())
}
