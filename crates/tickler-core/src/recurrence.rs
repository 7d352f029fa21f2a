use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::date::{days_in_month, format_date, is_representable, parse_date, render_date};
use crate::error::RecurrenceError;
use crate::rule::{parse_rule, RecurrenceRule};

/// How far ahead the monthly search looks when no month list is given.
const MONTHLY_HORIZON_MONTHS: i32 = 24;
/// How many years a (day, month) pair is searched. Leap years can be eight
/// years apart across a century, so Feb 29 needs offsets up to 8.
const YEARLY_HORIZON_YEARS: i32 = 9;

/// The caller's reason for asking for a next date.
///
/// This is an open tag: unknown values are kept verbatim and behave like any
/// other non-completion context. Only [`EvaluationContext::Done`] changes the
/// result, by disabling the "due today stays today" shortcut of daily rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EvaluationContext {
    Add,
    Done,
    List,
    Check,
    #[default]
    NextDate,
    Other(String),
}

impl EvaluationContext {
    /// Returns true when the task has just been marked as completed.
    #[inline]
    pub fn is_completion(&self) -> bool {
        matches!(self, EvaluationContext::Done)
    }
}

impl FromStr for EvaluationContext {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "add" => EvaluationContext::Add,
            "done" => EvaluationContext::Done,
            "list" => EvaluationContext::List,
            "check" => EvaluationContext::Check,
            "nextdate" | "" => EvaluationContext::NextDate,
            _ => EvaluationContext::Other(s.to_string()),
        })
    }
}

impl fmt::Display for EvaluationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationContext::Add => write!(f, "add"),
            EvaluationContext::Done => write!(f, "done"),
            EvaluationContext::List => write!(f, "list"),
            EvaluationContext::Check => write!(f, "check"),
            EvaluationContext::NextDate => write!(f, "nextdate"),
            EvaluationContext::Other(tag) => write!(f, "{}", tag),
        }
    }
}

impl From<String> for EvaluationContext {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(context) => context,
            Err(never) => match never {},
        }
    }
}


/// Computes `YYYYMMDD` next dates for a task.
///
/// This is the wire-level entry point: `anchor` is the stored task date and
/// `repeat` the raw rule string. The anchor is validated before the rule, so
/// a bad date is always reported as [`RecurrenceError::InvalidDate`].
pub fn next_date(
    now: NaiveDate,
    anchor: &str,
    repeat: &str,
    context: &EvaluationContext,
) -> Result<String, RecurrenceError> {
    let anchor = parse_date(anchor)?;
    let manager = RecurrenceManager::new(repeat)?;
    manager
        .next_occurrence_after(now, anchor, context)
        .map(format_date)
}

/// RecurrenceManager: a parsed repeat rule and the date searches over it.
///
/// Parsing happens once in [`RecurrenceManager::new`]; every later call is a
/// pure function of its arguments, so a manager can be shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceManager {
    rule: Option<RecurrenceRule>,
}

impl RecurrenceManager {
    /// Parses `repeat`. An empty string yields a manager for a one-off task.
    pub fn new(repeat: &str) -> Result<Self, RecurrenceError> {
        Ok(Self {
            rule: parse_rule(repeat)?,
        })
    }

    pub fn from_rule(rule: Option<RecurrenceRule>) -> Self {
        Self { rule }
    }

    #[inline]
    pub fn is_recurring(&self) -> bool {
        self.rule.is_some()
    }

    /// Finds the next date for a task anchored at `anchor`, relative to `now`.
    ///
    /// # Behavior
    /// - No rule: the anchor itself if it is after `now`, otherwise
    ///   [`RecurrenceError::NoRecurrence`]
    /// - `y`: the anchor's month/day in the first later year after `now`,
    ///   Feb 29 falling on Mar 1 in common years
    /// - `d n`: the anchor advanced by whole `n`-day steps until after `now`;
    ///   outside a completion, an anchor equal to `now` is returned unchanged
    /// - `w`: the nearest listed weekday after `max(now, anchor)`
    /// - `m`: the nearest listed month day after `now`, optionally limited to
    ///   the listed months
    pub fn next_occurrence_after(
        &self,
        now: NaiveDate,
        anchor: NaiveDate,
        context: &EvaluationContext,
    ) -> Result<NaiveDate, RecurrenceError> {
        let next = match &self.rule {
            None => {
                if anchor > now {
                    return Ok(anchor);
                }
                return Err(RecurrenceError::NoRecurrence(format_date(anchor)));
            }
            Some(RecurrenceRule::Yearly) => next_yearly(now, anchor),
            Some(RecurrenceRule::EveryNDays(days)) => {
                if !context.is_completion() && anchor == now {
                    return Ok(anchor);
                }
                next_every_n_days(now, anchor, *days)
            }
            Some(RecurrenceRule::Weekly(weekdays)) => next_weekly(now.max(anchor), weekdays),
            Some(RecurrenceRule::Monthly { days, months }) => match months {
                None => next_monthly(now, days),
                Some(months) => next_in_months(now, days, months),
            },
        };

        match next {
            Some(date) if is_representable(date) => Ok(date),
            Some(date) => Err(RecurrenceError::InvalidDate(render_date(date))),
            None => Err(RecurrenceError::NoCandidateFound(self.rule_text())),
        }
    }

    /// Lists up to `count` successive occurrences after `now`.
    ///
    /// The first occurrence honours `context`; each later one is strictly
    /// after its predecessor. A one-off task yields at most its own date.
    pub fn preview_occurrences(
        &self,
        now: NaiveDate,
        anchor: NaiveDate,
        context: &EvaluationContext,
        count: usize,
    ) -> Result<Vec<NaiveDate>, RecurrenceError> {
        let mut occurrences = Vec::with_capacity(count.min(64));
        if count == 0 {
            return Ok(occurrences);
        }

        if self.rule.is_none() {
            if anchor > now {
                occurrences.push(anchor);
            }
            return Ok(occurrences);
        }

        let mut cursor = self.next_occurrence_after(now, anchor, context)?;
        occurrences.push(cursor);
        while occurrences.len() < count {
            cursor = self.next_occurrence_after(cursor, anchor, &EvaluationContext::Done)?;
            occurrences.push(cursor);
        }
        Ok(occurrences)
    }

    fn rule_text(&self) -> String {
        self.rule
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// The anchor's month/day in `year`, Feb 29 becoming Mar 1 in common years.
fn anniversary(anchor: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

fn next_yearly(now: NaiveDate, anchor: NaiveDate) -> Option<NaiveDate> {
    // Years before `now`'s year can never be after it.
    let mut year = (anchor.year() + 1).max(now.year());
    loop {
        let candidate = anniversary(anchor, year)?;
        if candidate > now {
            return Some(candidate);
        }
        year += 1;
    }
}

fn next_every_n_days(now: NaiveDate, anchor: NaiveDate, days: u32) -> Option<NaiveDate> {
    let step = i64::from(days);
    let first = anchor.checked_add_signed(Duration::days(step))?;
    if first > now {
        return Some(first);
    }
    let steps = (now - anchor).num_days() / step + 1;
    anchor.checked_add_signed(Duration::days(steps * step))
}

fn next_weekly(from: NaiveDate, weekdays: &[Weekday]) -> Option<NaiveDate> {
    weekdays
        .iter()
        .filter_map(|&weekday| next_weekday(from, weekday))
        .min()
}

/// The first `weekday` strictly after `from`, between 1 and 7 days ahead.
fn next_weekday(from: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = from.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    let offset = match (target - current).rem_euclid(7) {
        0 => 7,
        n => n,
    };
    from.checked_add_signed(Duration::days(offset))
}

/// Resolves a possibly negative month day against the real length of the month.
fn resolve_month_day(year: i32, month: u32, day: i32) -> Option<NaiveDate> {
    let length = days_in_month(year, month) as i32;
    let resolved = if day > 0 { day } else { length + day + 1 };
    if resolved < 1 || resolved > length {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, resolved as u32)
}

fn next_monthly(now: NaiveDate, days: &[i32]) -> Option<NaiveDate> {
    days.iter()
        .filter_map(|&day| {
            (0..MONTHLY_HORIZON_MONTHS)
                .filter_map(|offset| {
                    let index = now.month0() as i32 + offset;
                    let year = now.year() + index.div_euclid(12);
                    let month = index.rem_euclid(12) as u32 + 1;
                    resolve_month_day(year, month, day)
                })
                .find(|&candidate| candidate > now)
        })
        .min()
}

fn next_in_months(now: NaiveDate, days: &[i32], months: &[u32]) -> Option<NaiveDate> {
    days.iter()
        .flat_map(|&day| months.iter().map(move |&month| (day, month)))
        .filter_map(|(day, month)| {
            (0..YEARLY_HORIZON_YEARS)
                .filter_map(|offset| resolve_month_day(now.year() + offset, month, day))
                .find(|&candidate| candidate > now)
        })
        .min()
}
