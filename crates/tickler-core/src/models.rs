use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scheduled task as stored in the `scheduler` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    /// Due date as `YYYYMMDD`
    pub date: String,
    pub title: String,
    pub comment: String,
    /// Raw repeat rule, empty for one-off tasks
    pub repeat: String,
}

impl Task {
    #[inline]
    pub fn is_recurring(&self) -> bool {
        !self.repeat.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    /// Defaults to the reference date when absent or blank
    pub date: Option<String>,
    pub title: String,
    pub comment: String,
    pub repeat: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub date: Option<String>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub repeat: Option<String>,
}

impl UpdateTaskData {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.title.is_none() && self.comment.is_none() && self.repeat.is_none()
    }
}

/// Outcome of marking a task as done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// A one-off task was completed and deleted.
    Removed(Task),
    /// A repeating task was moved to its next occurrence.
    Rescheduled(Task),
}
