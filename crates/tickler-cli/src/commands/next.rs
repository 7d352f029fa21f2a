use anyhow::Result;
use chrono::NaiveDate;
use tickler_core::date::parse_date;
use tickler_core::{next_date, EvaluationContext};

use crate::cli::NextCommand;

pub fn print_next_date(command: NextCommand, today: NaiveDate) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(value) => parse_date(value)?,
        None => today,
    };
    let context = EvaluationContext::from(command.status);

    let next = next_date(now, &command.date, &command.repeat, &context)?;
    println!("{}", next);
    Ok(())
}
