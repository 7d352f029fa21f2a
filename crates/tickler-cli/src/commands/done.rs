use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tickler_core::models::CompletionResult;
use tickler_core::repository::TaskRepository;

use crate::cli::DoneCommand;

pub async fn complete_task(repo: &impl TaskRepository, command: DoneCommand, today: NaiveDate) -> Result<()> {
    match repo.complete_task(command.id, today).await? {
        CompletionResult::Removed(task) => {
            println!("{} Completed task '{}'", "✓".green(), task.title);
        }
        CompletionResult::Rescheduled(task) => {
            println!(
                "{} Completed task '{}', next due {}",
                "✓".green(),
                task.title,
                task.date.cyan()
            );
        }
    }
    Ok(())
}
