use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, UpdateTaskData};
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod tasks;

pub use tasks::schedule_date;

/// Storage operations for scheduled tasks.
///
/// Every operation that needs "today" takes it as an argument, so callers
/// decide the reference date and tests stay deterministic.
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, data: NewTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    async fn find_upcoming_tasks(&self, today: NaiveDate, limit: usize) -> Result<Vec<Task>, CoreError>;
    async fn update_task(&self, id: i64, data: UpdateTaskData, today: NaiveDate) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
    async fn complete_task(&self, id: i64, today: NaiveDate) -> Result<CompletionResult, CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Closes the pool, waiting for open connections to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
