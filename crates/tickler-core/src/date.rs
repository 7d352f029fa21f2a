//! The `YYYYMMDD` calendar date codec shared by the engine and the task store.

use chrono::{Datelike, NaiveDate};

use crate::error::RecurrenceError;

/// Wire format for every date the scheduler stores or exchanges.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Parses an 8-digit `YYYYMMDD` string into a calendar date.
///
/// Only exactly eight ASCII digits are accepted, so signs, padding and
/// shorter year forms that chrono would otherwise tolerate are rejected.
pub fn parse_date(value: &str) -> Result<NaiveDate, RecurrenceError> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecurrenceError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| RecurrenceError::InvalidDate(value.to_string()))
}

/// Formats a date as `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Returns `true` if the date can be written as eight digits.
#[inline]
pub fn is_representable(date: NaiveDate) -> bool {
    (0..=9999).contains(&date.year())
}

/// Renders any date in `YYYYMMDD` order, including years that do not fit in
/// four digits. Used for error messages only.
pub fn render_date(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("20240101", 2024, 1, 1)]
    #[case("20240229", 2024, 2, 29)]
    #[case("00010101", 1, 1, 1)]
    #[case("99991231", 9999, 12, 31)]
    fn test_parse_valid(#[case] input: &str, #[case] y: i32, #[case] m: u32, #[case] d: u32) {
        assert_eq!(parse_date(input).unwrap(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("2024011")]
    #[case("202401011")]
    #[case("2024-1-01")]
    #[case("+2024010")]
    #[case(" 2024010")]
    #[case("20230229")]
    #[case("20241301")]
    #[case("20240431")]
    #[case("20240100")]
    #[case("abcdefgh")]
    fn test_parse_invalid(#[case] input: &str) {
        assert_eq!(
            parse_date(input),
            Err(RecurrenceError::InvalidDate(input.to_string()))
        );
    }

    #[test]
    fn test_year_zero_round_trips() {
        let date = parse_date("00000101").unwrap();
        assert!(is_representable(date));
        assert_eq!(format_date(date), "00000101");
    }

    #[test]
    fn test_render_date_beyond_four_digit_years() {
        let date = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        assert!(!is_representable(date));
        assert_eq!(render_date(date), "100000101");
    }

    #[test]
    fn test_format_zero_pads() {
        let date = NaiveDate::from_ymd_opt(987, 3, 4).unwrap();
        assert_eq!(format_date(date), "09870304");
    }

    #[rstest]
    #[case(2024, true)]
    #[case(2023, false)]
    #[case(1900, false)]
    #[case(2000, true)]
    fn test_is_leap_year(#[case] year: i32, #[case] expected: bool) {
        assert_eq!(is_leap_year(year), expected);
    }

    #[rstest]
    #[case(2024, 2, 29)]
    #[case(2025, 2, 28)]
    #[case(2025, 4, 30)]
    #[case(2025, 12, 31)]
    fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    proptest! {
        #[test]
        fn prop_format_parse_round_trip(days in 0i64..3_652_059) {
            let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap() + chrono::Duration::days(days);
            let formatted = format_date(date);
            prop_assert_eq!(formatted.len(), 8);
            prop_assert_eq!(parse_date(&formatted).unwrap(), date);
        }

        #[test]
        fn prop_days_in_month_matches_chrono(year in 1i32..9999, month in 1u32..=12) {
            let last = days_in_month(year, month);
            prop_assert!(NaiveDate::from_ymd_opt(year, month, last).is_some());
            prop_assert!(NaiveDate::from_ymd_opt(year, month, last + 1).is_none());
        }
    }
}
