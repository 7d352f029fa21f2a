use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tickler_core::models::NewTaskData;
use tickler_core::repository::TaskRepository;

use crate::cli::AddCommand;
use crate::views::json;

pub async fn add_task(repo: &impl TaskRepository, command: AddCommand, today: NaiveDate) -> Result<()> {
    let data = NewTaskData {
        date: command.date,
        title: command.title,
        comment: command.comment,
        repeat: command.repeat,
    };
    let task = repo.add_task(data, today).await?;

    if command.json {
        println!("{}", json::id(task.id)?);
    } else {
        println!(
            "{} Added task {} '{}' due {}",
            "✓".green(),
            task.id.yellow(),
            task.title,
            task.date
        );
    }
    Ok(())
}
