use anyhow::Result;
use owo_colors::OwoColorize;
use tickler_core::RecurrenceRule;

use crate::cli::CheckCommand;

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A short English reading of a rule.
pub fn describe(rule: &RecurrenceRule) -> String {
    match rule {
        RecurrenceRule::Yearly => "every year on the same day".to_string(),
        RecurrenceRule::EveryNDays(1) => "every day".to_string(),
        RecurrenceRule::EveryNDays(days) => format!("every {} days", days),
        RecurrenceRule::Weekly(weekdays) => {
            let names: Vec<String> = weekdays.iter().map(|w| format!("{:?}", w)).collect();
            format!("every week on {}", join(&names))
        }
        RecurrenceRule::Monthly { days, months: None } => {
            format!("on day {} of every month", join(days))
        }
        RecurrenceRule::Monthly {
            days,
            months: Some(months),
        } => format!("on day {} of month {}", join(days), join(months)),
    }
}

pub fn check_rule(command: CheckCommand) -> Result<()> {
    let rule: RecurrenceRule = command.rule.parse()?;
    println!("{} {}", "✓".green(), rule.to_string().bold());
    println!("  {}", describe(&rule));
    Ok(())
}
