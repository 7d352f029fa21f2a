use anyhow::Result;
use chrono::{Local, NaiveDate};
use tickler_core::date::parse_date;

/// The date every command treats as "today": `--today` when given, else the
/// local calendar date.
pub fn reference_date(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(value) => Ok(parse_date(value)?),
        None => Ok(Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_date_override() {
        let date = reference_date(Some("20240229")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_reference_date_rejects_bad_override() {
        assert!(reference_date(Some("2024-02-29")).is_err());
    }

    #[test]
    fn test_reference_date_defaults_to_local_today() {
        assert_eq!(reference_date(None).unwrap(), Local::now().date_naive());
    }
}
