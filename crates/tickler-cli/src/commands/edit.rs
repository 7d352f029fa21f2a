use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tickler_core::error::CoreError;
use tickler_core::models::UpdateTaskData;
use tickler_core::repository::TaskRepository;

use crate::cli::EditCommand;

pub async fn edit_task(repo: &impl TaskRepository, command: EditCommand, today: NaiveDate) -> Result<()> {
    let repeat = if command.repeat_clear {
        Some(String::new())
    } else {
        command.repeat
    };
    let update = UpdateTaskData {
        date: command.date,
        title: command.title,
        comment: command.comment,
        repeat,
    };

    if update.is_empty() {
        return Err(CoreError::InvalidInput("No changes specified".to_string()).into());
    }

    let task = repo.update_task(command.id, update, today).await?;
    println!(
        "{} Updated task {} '{}' due {}",
        "✓".green(),
        task.id.yellow(),
        task.title,
        task.date
    );
    Ok(())
}
