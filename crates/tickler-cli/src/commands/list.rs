use anyhow::Result;
use chrono::NaiveDate;
use tickler_core::date::format_date;
use tickler_core::repository::TaskRepository;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::views::{json, table::display_tasks};

pub async fn list_tasks(
    repo: &impl TaskRepository,
    command: ListCommand,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let limit = command.limit.unwrap_or(config.list_limit);
    let tasks = repo.find_upcoming_tasks(today, limit).await?;

    if command.json {
        println!("{}", json::task_list(&tasks)?);
    } else {
        display_tasks(&tasks, &format_date(today));
    }
    Ok(())
}
