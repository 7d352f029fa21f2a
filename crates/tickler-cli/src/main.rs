use chrono::NaiveDate;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tickler_core::db;
use tickler_core::error::{CoreError, RecurrenceError};
use tickler_core::repository::SqliteRepository;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod util;
mod views;

use cli::{Cli, Commands};
use config::Config;

const LOG_ENV: &str = "TICKLER_LOG";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Invalid configuration: {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_filter);

    if let Err(e) = run(cli, &config).await {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn open_repository(config: &Config) -> anyhow::Result<SqliteRepository> {
    let pool = db::establish_connection(&config.database_path).await?;
    Ok(SqliteRepository::new(pool))
}

async fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let today = util::reference_date(cli.today.as_deref())?;
    tracing::debug!(%today, "reference date");

    match cli.command {
        Commands::Next(command) => commands::next::print_next_date(command, today),
        Commands::Check(command) => commands::check::check_rule(command),
        Commands::Preview(command) => commands::preview::preview_rule(command, today, config),
        command => {
            let repo = open_repository(config).await?;
            let result = run_task_command(&repo, command, config, today).await;
            // Closing flushes every connection before the process exits.
            repo.close().await;
            result
        }
    }
}

async fn run_task_command(
    repo: &SqliteRepository,
    command: Commands,
    config: &Config,
    today: NaiveDate,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(command) => commands::add::add_task(repo, command, today).await,
        Commands::List(command) => commands::list::list_tasks(repo, command, config, today).await,
        Commands::Show(command) => commands::show::show_task(repo, command, today).await,
        Commands::Edit(command) => commands::edit::edit_task(repo, command, today).await,
        Commands::Done(command) => commands::done::complete_task(repo, command, today).await,
        Commands::Delete(command) => commands::delete::delete_task(repo, command).await,
        Commands::Next(_) | Commands::Check(_) | Commands::Preview(_) => {
            unreachable!("engine commands never open the database")
        }
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    let recurrence = err
        .downcast_ref::<RecurrenceError>()
        .or_else(|| match err.downcast_ref::<CoreError>() {
            Some(CoreError::Recurrence(e)) => Some(e),
            _ => None,
        });

    if let Some(e) = recurrence {
        eprintln!("{} {}", "Error:".style(error_style), e);
        if matches!(
            e,
            RecurrenceError::MalformedRule { .. }
                | RecurrenceError::UnsupportedModifier(_)
                | RecurrenceError::InvalidArgument { .. }
        ) {
            eprintln!("Rules look like: y | d <1-400> | w <1-7,...> | m <days> [months]");
        }
        return;
    }

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::NotFound(id)) => {
            eprintln!("{} Task with ID '{}' not found.", "Error:".style(error_style), id.yellow());
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
