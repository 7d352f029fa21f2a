use thiserror::Error;

/// Failures of the recurrence engine. Every variant is returned to the caller
/// as-is; the engine never recovers from one itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Invalid date '{0}': expected YYYYMMDD")]
    InvalidDate(String),

    /// The rule is empty and the anchor is not after the reference date.
    #[error("Task dated {0} does not repeat and has no upcoming occurrence")]
    NoRecurrence(String),

    #[error("Malformed repeat rule '{rule}': {reason}")]
    MalformedRule { rule: String, reason: String },

    #[error("Unsupported repeat modifier '{0}'")]
    UnsupportedModifier(String),

    #[error("Invalid argument '{value}' in repeat rule '{rule}': {reason}")]
    InvalidArgument {
        rule: String,
        value: String,
        reason: String,
    },

    #[error("No matching date found for repeat rule '{0}'")]
    NoCandidateFound(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),
}
