//! Date normalization
//!
//! Reservation dates arrive from booking platforms and legacy spreadsheet
//! exports in a handful of formats. `parse_date` maps all of them onto a
//! canonical `NaiveDate` at the boundary so the rest of the system never
//! sees a raw date string.

use chrono::{NaiveDate, NaiveDateTime};

use super::error::{DomainError, DomainResult};

/// Accepted date formats, tried in order. First match wins.
///
/// `%d/%m/%Y` is tried before `%m/%d/%Y`, so an ambiguous `03/04/2026`
/// resolves as day 3, month 4. Historical data was entered under that
/// convention; the ordering must not change.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", // 2026-01-02
    "%Y/%m/%d", // 2026/01/02
    "%d/%m/%Y", // 02/01/2026
    "%m/%d/%Y", // 01/02/2026
    "%Y%m%d",   // 20260102
    "%d-%m-%Y", // 02-01-2026
    "%m-%d-%Y", // 01-02-2026
];

/// Parse a date string in any of the accepted formats.
///
/// ISO 8601 timestamps (as produced by the relational store) are also
/// accepted and truncated to their date component. Empty input and
/// unrecognized formats fail with [`DomainError::DateFormat`].
pub fn parse_date(input: &str) -> DomainResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DomainError::DateFormat("empty date string".to_string()));
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Ok(date);
        }
    }

    // Timestamps get truncated to their date component.
    for fmt in &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt.date());
        }
    }

    Err(DomainError::DateFormat(input.to_string()))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_date("2026-01-02").unwrap(), date(2026, 1, 2));
    }

    #[test]
    fn parses_slash_formats() {
        assert_eq!(parse_date("2026/01/02").unwrap(), date(2026, 1, 2));
    }

    #[test]
    fn parses_compact_format() {
        assert_eq!(parse_date("20260102").unwrap(), date(2026, 1, 2));
    }

    #[test]
    fn day_month_precedence_over_month_day() {
        // 03/04/2026 must resolve as 3 April, not 4 March
        assert_eq!(parse_date("03/04/2026").unwrap(), date(2026, 4, 3));
        assert_eq!(parse_date("03-04-2026").unwrap(), date(2026, 4, 3));
    }

    #[test]
    fn unambiguous_month_day_still_parses() {
        // Day slot 13 is invalid as a month, so the %m/%d/%Y fallback kicks in
        assert_eq!(parse_date("12/25/2026").unwrap(), date(2026, 12, 25));
    }

    #[test]
    fn timestamp_truncates_to_date() {
        assert_eq!(
            parse_date("2026-01-02T14:30:00").unwrap(),
            date(2026, 1, 2)
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_date("  2026-01-02  ").unwrap(), date(2026, 1, 2));
    }

    #[test]
    fn empty_string_fails() {
        assert!(matches!(
            parse_date(""),
            Err(DomainError::DateFormat(_))
        ));
        assert!(matches!(
            parse_date("   "),
            Err(DomainError::DateFormat(_))
        ));
    }

    #[test]
    fn garbage_fails() {
        assert!(matches!(
            parse_date("next tuesday"),
            Err(DomainError::DateFormat(_))
        ));
    }
}
