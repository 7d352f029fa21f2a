use crate::date::{format_date, parse_date};
use crate::error::{CoreError, RecurrenceError};
use crate::models::{CompletionResult, NewTaskData, Task, UpdateTaskData};
use crate::recurrence::{next_date, EvaluationContext, RecurrenceManager};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Resolves the date a task should be stored under.
///
/// A missing date means today. A date in the past is moved forward: to today
/// for one-off tasks, to the rule's next occurrence for repeating ones. The
/// repeat rule is validated in every case.
pub fn schedule_date(
    today: NaiveDate,
    date: Option<&str>,
    repeat: &str,
    context: &EvaluationContext,
) -> Result<String, RecurrenceError> {
    let manager = RecurrenceManager::new(repeat)?;
    let anchor = match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => parse_date(date)?,
        None => return Ok(format_date(today)),
    };

    if anchor >= today {
        return Ok(format_date(anchor));
    }
    if !manager.is_recurring() {
        return Ok(format_date(today));
    }
    manager
        .next_occurrence_after(today, anchor, context)
        .map(format_date)
}

fn require_title(title: &str) -> Result<String, CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::InvalidInput("Task title must not be empty".to_string()));
    }
    Ok(title.to_string())
}

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let title = require_title(&data.title)?;
        let repeat = data.repeat.trim().to_string();
        let date = schedule_date(today, data.date.as_deref(), &repeat, &EvaluationContext::Add)?;

        let mut tx = self.pool().begin().await?;
        let task: Task = sqlx::query_as(
            r#"INSERT INTO scheduler (date, title, comment, repeat)
            VALUES ($1, $2, $3, $4)
            RETURNING *"#,
        )
        .bind(&date)
        .bind(&title)
        .bind(&data.comment)
        .bind(&repeat)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = task.id, date = %task.date, repeat = %task.repeat, "task added");
        Ok(task)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn find_upcoming_tasks(&self, today: NaiveDate, limit: usize) -> Result<Vec<Task>, CoreError> {
        let tasks: Vec<Task> = sqlx::query_as("SELECT * FROM scheduler ORDER BY date, id")
            .fetch_all(self.pool())
            .await?;

        let today_str = format_date(today);
        let mut upcoming: Vec<Task> = tasks
            .into_iter()
            .map(|mut task| {
                if task.is_recurring() && task.date <= today_str {
                    match next_date(today, &task.date, &task.repeat, &EvaluationContext::List) {
                        Ok(next) => task.date = next,
                        Err(e) => {
                            tracing::warn!(id = task.id, error = %e, "cannot compute next occurrence, keeping stored date")
                        }
                    }
                }
                task
            })
            .collect();

        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        upcoming.truncate(limit);
        Ok(upcoming)
    }

    async fn update_task(&self, id: i64, data: UpdateTaskData, today: NaiveDate) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;

        let current: Task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let schedule_changed = data.date.is_some() || data.repeat.is_some();
        let title = require_title(data.title.as_deref().unwrap_or(&current.title))?;
        let comment = data.comment.unwrap_or(current.comment);
        let repeat = data.repeat.map_or(current.repeat, |r| r.trim().to_string());
        let date = data.date.unwrap_or(current.date);

        let date = if schedule_changed {
            schedule_date(today, Some(&date), &repeat, &EvaluationContext::Check)?
        } else {
            date
        };

        let task: Task = sqlx::query_as(
            r#"UPDATE scheduler
            SET date = $1, title = $2, comment = $3, repeat = $4
            WHERE id = $5
            RETURNING *"#,
        )
        .bind(&date)
        .bind(&title)
        .bind(&comment)
        .bind(&repeat)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id, date = %task.date, "task updated");
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        tracing::debug!(id, "task deleted");
        Ok(())
    }

    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as("SELECT * FROM scheduler WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        if !task.is_recurring() {
            sqlx::query("DELETE FROM scheduler WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            tracing::debug!(id, "one-off task completed and removed");
            return Ok(CompletionResult::Removed(task));
        }

        let next = next_date(today, &task.date, &task.repeat, &EvaluationContext::Done)?;
        let rescheduled: Task = sqlx::query_as("UPDATE scheduler SET date = $1 WHERE id = $2 RETURNING *")
            .bind(&next)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(id, from = %task.date, to = %next, "recurring task rescheduled");
        Ok(CompletionResult::Rescheduled(rescheduled))
    }
}
