use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tickler_core::date::{format_date, parse_date};
use tickler_core::{EvaluationContext, RecurrenceManager};

use crate::cli::PreviewCommand;
use crate::config::Config;

pub fn preview_rule(command: PreviewCommand, today: NaiveDate, config: &Config) -> Result<()> {
    let anchor = match command.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => today,
    };
    let count = command.count.unwrap_or(config.preview_count);

    let manager = RecurrenceManager::new(&command.repeat)?;
    let occurrences =
        manager.preview_occurrences(today, anchor, &EvaluationContext::default(), count)?;

    if occurrences.is_empty() {
        println!("No upcoming occurrences.");
        return Ok(());
    }
    for date in occurrences {
        println!("{}  {}", format_date(date), date.format("%a").dimmed());
    }
    Ok(())
}
