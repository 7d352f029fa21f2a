//! Repeat rule grammar.
//!
//! A rule is a short whitespace-delimited string:
//!
//! | Rule                     | Meaning                                          |
//! |--------------------------|--------------------------------------------------|
//! | `y`                      | every year on the same month/day                 |
//! | `d <n>`                  | every `n` days, `1..=400`                        |
//! | `w <d1,d2,..>`           | on ISO weekdays, `1` = Monday .. `7` = Sunday    |
//! | `m <day,..> [<month,..>]`| on month days `-31..=31` (not 0), optional months|
//!
//! Negative month days count from the end of the month, `-1` being the last day.
//! The empty string means "does not repeat" and is handled by [`parse_rule`].

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::RecurrenceError;

pub const MAX_DAY_INTERVAL: u32 = 400;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A validated repeat rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    Yearly,
    EveryNDays(u32),
    Weekly(Vec<Weekday>),
    Monthly {
        /// Day of month, negative values count back from the month's last day.
        days: Vec<i32>,
        /// Restricts the rule to these months (1-12) when present.
        months: Option<Vec<u32>>,
    },
}

/// Parses a repeat rule, treating an empty or blank string as "no recurrence".
pub fn parse_rule(repeat: &str) -> Result<Option<RecurrenceRule>, RecurrenceError> {
    let tokens: Vec<&str> = repeat.split_whitespace().collect();
    let Some((&modifier, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let malformed = |reason: &str| RecurrenceError::MalformedRule {
        rule: repeat.to_string(),
        reason: reason.to_string(),
    };

    let rule = match modifier {
        "y" => {
            if !args.is_empty() {
                return Err(malformed("yearly repeat takes no arguments"));
            }
            RecurrenceRule::Yearly
        }
        "d" => {
            let [interval] = args else {
                return Err(malformed("daily repeat takes exactly one day count"));
            };
            let days = parse_list_value(repeat, interval, 1, MAX_DAY_INTERVAL as i64)?;
            RecurrenceRule::EveryNDays(days as u32)
        }
        "w" => match args {
            [] => {
                return Err(RecurrenceError::InvalidArgument {
                    rule: repeat.to_string(),
                    value: String::new(),
                    reason: "at least one weekday is required".to_string(),
                })
            }
            [list] => {
                let weekdays = parse_list(repeat, list, 1, 7)?
                    .into_iter()
                    .map(|n| WEEKDAYS[(n - 1) as usize])
                    .collect();
                RecurrenceRule::Weekly(weekdays)
            }
            _ => return Err(malformed("weekly repeat takes a single comma-separated list")),
        },
        "m" => {
            let (days, months) = match args {
                [days] => (days, None),
                [days, months] => (days, Some(months)),
                _ => {
                    return Err(malformed(
                        "monthly repeat takes a day list and an optional month list",
                    ))
                }
            };
            let days = parse_list(repeat, days, -31, 31)?
                .into_iter()
                .map(|day| {
                    if day == 0 {
                        Err(RecurrenceError::InvalidArgument {
                            rule: repeat.to_string(),
                            value: "0".to_string(),
                            reason: "month day must not be zero".to_string(),
                        })
                    } else {
                        Ok(day as i32)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            let months = months
                .map(|list| parse_list(repeat, list, 1, 12))
                .transpose()?
                .map(|values| values.into_iter().map(|m| m as u32).collect());
            RecurrenceRule::Monthly { days, months }
        }
        other => return Err(RecurrenceError::UnsupportedModifier(other.to_string())),
    };

    Ok(Some(rule))
}

fn parse_list(rule: &str, list: &str, min: i64, max: i64) -> Result<Vec<i64>, RecurrenceError> {
    list.split(',')
        .map(|value| parse_list_value(rule, value, min, max))
        .collect()
}

fn parse_list_value(rule: &str, value: &str, min: i64, max: i64) -> Result<i64, RecurrenceError> {
    let invalid = |reason: String| RecurrenceError::InvalidArgument {
        rule: rule.to_string(),
        value: value.to_string(),
        reason,
    };

    let number: i64 = value
        .parse()
        .map_err(|_| invalid("not an integer".to_string()))?;
    if !(min..=max).contains(&number) {
        return Err(invalid(format!("must be between {} and {}", min, max)));
    }
    Ok(number)
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)?.ok_or_else(|| RecurrenceError::MalformedRule {
            rule: s.to_string(),
            reason: "repeat rule is empty".to_string(),
        })
    }
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceRule::Yearly => write!(f, "y"),
            RecurrenceRule::EveryNDays(days) => write!(f, "d {}", days),
            RecurrenceRule::Weekly(weekdays) => write!(
                f,
                "w {}",
                join(weekdays.iter().map(|w| w.number_from_monday()))
            ),
            RecurrenceRule::Monthly { days, months } => {
                write!(f, "m {}", join(days))?;
                if let Some(months) = months {
                    write!(f, " {}", join(months))?;
                }
                Ok(())
            }
        }
    }
}
