use clap::{Parser, Subcommand};

/// Tickler: a personal scheduler for one-off and repeating tasks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reference date as YYYYMMDD (defaults to the local calendar date)
    #[arg(long, global = true, value_name = "YYYYMMDD")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute the next date of a repeat rule
    Next(NextCommand),
    /// Validate a repeat rule and show its canonical form
    Check(CheckCommand),
    /// Show the upcoming occurrences of a repeat rule
    Preview(PreviewCommand),
    /// Add a new task
    Add(AddCommand),
    /// List upcoming tasks
    List(ListCommand),
    /// Show a single task
    Show(ShowCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Mark a task as done
    Done(DoneCommand),
    /// Delete a task
    Delete(DeleteCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    /// Reference date (defaults to --today)
    #[arg(long, value_name = "YYYYMMDD")]
    pub now: Option<String>,
    /// The task's anchor date
    #[arg(long, value_name = "YYYYMMDD")]
    pub date: String,
    /// Repeat rule, empty for a one-off task
    #[arg(long, default_value = "")]
    pub repeat: String,
    /// Why the date is requested (e.g. "done")
    #[arg(long, default_value = "")]
    pub status: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    /// The repeat rule, e.g. "m 1,-1" (quote it)
    pub rule: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    /// Anchor date (defaults to --today)
    #[arg(long, value_name = "YYYYMMDD")]
    pub date: Option<String>,
    /// Repeat rule
    #[arg(long)]
    pub repeat: String,
    /// Number of occurrences (defaults to the configured preview_count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// Due date; past dates are moved forward
    #[arg(short, long, value_name = "YYYYMMDD")]
    pub date: Option<String>,
    /// Free-form comment
    #[arg(short, long, default_value = "")]
    pub comment: String,
    /// Repeat rule
    #[arg(short, long, default_value = "")]
    pub repeat: String,
    /// Print the new id as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Maximum number of tasks (defaults to the configured list_limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID of the task to show
    pub id: i64,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, value_name = "YYYYMMDD")]
    pub date: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,

    #[arg(long)]
    pub repeat: Option<String>,
    /// Remove the repeat rule (convert to a one-off task)
    #[arg(long, conflicts_with = "repeat")]
    pub repeat_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to mark as done
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_today_is_global() {
        let cli = Cli::try_parse_from(["tickler", "list", "--today", "20240601"]).unwrap();
        assert_eq!(cli.today.as_deref(), Some("20240601"));
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_edit_repeat_flags_conflict() {
        let result = Cli::try_parse_from(["tickler", "edit", "1", "--repeat", "y", "--repeat-clear"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_next_defaults() {
        let cli = Cli::try_parse_from(["tickler", "next", "--date", "20240101"]).unwrap();
        match cli.command {
            Commands::Next(next) => {
                assert_eq!(next.repeat, "");
                assert_eq!(next.status, "");
                assert_eq!(next.now, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
