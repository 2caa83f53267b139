//! Permissive multi-format date parsing.
//!
//! Source sheets carry dates in whatever shape the exporting tool produced.
//! Formats are tried in a fixed order; ambiguous slash dates resolve
//! month-first. Anything unparsable is `None`, never an error.

use chrono::{NaiveDate, NaiveDateTime};

/// Datetime shapes, truncated to their date component.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only shapes. Order matters: `%m/%d/%Y` before `%d/%m/%Y` makes
/// ambiguous slash dates month-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%d.%m.%Y",
];

/// Parse a date from any supported format.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(d);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_date() {
        assert_eq!(parse_date("2024-01-05"), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn datetime_truncates_to_date() {
        assert_eq!(parse_date("2024-01-05T10:30:00"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("2024-01-05 10:30"), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn slash_dates_are_month_first() {
        assert_eq!(parse_date("01/02/2024"), Some(ymd(2024, 1, 2)));
        // Day > 12 forces the day-first reading.
        assert_eq!(parse_date("25/12/2024"), Some(ymd(2024, 12, 25)));
    }

    #[test]
    fn named_month_formats() {
        assert_eq!(parse_date("15-Jan-2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("Jan 15, 2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn invalid_input_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }
}
