//! # Tickler Core Library
//!
//! Storage and date arithmetic for a personal task scheduler. Tasks carry a
//! `YYYYMMDD` due date and an optional compact repeat rule; the recurrence
//! engine decides where a task moves when it is listed, added or completed.
//!
//! ## Core Modules
//!
//! - [`date`]: The `YYYYMMDD` codec and calendar helpers
//! - [`rule`]: Repeat rule grammar (`y`, `d N`, `w ...`, `m ... [...]`)
//! - [`recurrence`]: Next-occurrence search over parsed rules
//! - [`db`]: Database connection and migration management
//! - [`models`]: Core data structures and transfer objects
//! - [`repository`]: Data access layer with Repository pattern
//! - [`error`]: Error types for the engine and the store
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tickler_core::{
//!     db, date::parse_date, models::NewTaskData,
//!     repository::{SqliteRepository, TaskRepository},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::establish_connection("tickler.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let today = parse_date("20240601")?;
//!     let task = repo
//!         .add_task(
//!             NewTaskData {
//!                 title: "Water the plants".to_string(),
//!                 repeat: "w 1,4".to_string(),
//!                 ..Default::default()
//!             },
//!             today,
//!         )
//!         .await?;
//!     println!("next due {}", task.date);
//!     Ok(())
//! }
//! ```
//!
//! The engine alone needs no database:
//!
//! ```rust
//! use tickler_core::{next_date, EvaluationContext};
//! use tickler_core::date::parse_date;
//!
//! let now = parse_date("20240126").unwrap();
//! let next = next_date(now, "20240126", "m 1,-1", &EvaluationContext::default()).unwrap();
//! assert_eq!(next, "20240131");
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod rule;

pub use error::{CoreError, RecurrenceError};
pub use recurrence::{next_date, EvaluationContext, RecurrenceManager};
pub use rule::{parse_rule, RecurrenceRule};
