// 🔄 Value Coercion - text → typed values
// Unparseable values become None instead of raising, so rates can be computed as present / total

use chrono::{DateTime, NaiveDate, NaiveDateTime};

// ============================================================================
// DATE FORMATS
// ============================================================================

/// Date-only formats, month before day when ambiguous.
/// `%b` only takes three-letter month abbreviations, so full names need `%B`.
/// Two-digit-year variants come first: `%Y` would happily read "24" as year 24.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%y",
    "%m-%d-%Y",
    "%m.%d.%y",
    "%m.%d.%Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d-%B-%Y",
    "%Y%m%d",
];

/// Tried only after every month-first reading failed (e.g. "25/12/2024")
const DAY_FIRST_FORMATS: &[&str] = &[
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d-%m-%y",
    "%d-%m-%Y",
    "%d.%m.%y",
    "%d.%m.%Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a calendar date, month-first when ambiguous
///
/// # Examples:
/// ```
/// use cleaning_validator::coerce::parse_date;
///
/// assert!(parse_date("2024-01-15").is_some());
/// assert!(parse_date("01/02/2024").is_some()); // January 2nd
/// assert!(parse_date("not a date").is_none());
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(date) = try_formats(text, DATE_FORMATS) {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date());
        }
    }

    try_formats(text, DAY_FIRST_FORMATS)
}

fn try_formats(text: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

// ============================================================================
// NUMBERS
// ============================================================================

/// Coerce an amount to a number.
///
/// Plain decimal and scientific notation only: "$12.50" and "1,200" are not
/// numeric. NaN counts as missing.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}

// ============================================================================
// STRING CHECKS
// ============================================================================

/// True if the text starts or ends with a whitespace character
pub fn has_outer_whitespace(text: &str) -> bool {
    let starts = text.chars().next().map_or(false, char::is_whitespace);
    let ends = text.chars().next_back().map_or(false, char::is_whitespace);
    starts || ends
}

/// True if lowercasing the text leaves it unchanged
pub fn is_lowercase(text: &str) -> bool {
    text.to_lowercase() == text
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024/01/15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("20240115"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_ambiguous_date_is_month_first() {
        assert_eq!(parse_date("01/02/2024"), Some(ymd(2024, 1, 2)));
        assert_eq!(parse_date("03-04-2024"), Some(ymd(2024, 3, 4)));
    }

    #[test]
    fn test_day_first_fallback() {
        assert_eq!(parse_date("25/12/2024"), Some(ymd(2024, 12, 25)));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(parse_date("01/15/24"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(parse_date("Jan 15, 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("January 15 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("15 Jan 2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_full_month_names() {
        assert_eq!(parse_date("March 5 2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("September 5 2024"), Some(ymd(2024, 9, 5)));
        assert_eq!(parse_date("September 5, 2024"), Some(ymd(2024, 9, 5)));
        assert_eq!(parse_date("5 March 2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("5-March-2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("Mar 5 2024"), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn test_datetimes_keep_date() {
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15 10:30:00"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024-01-15T10:30:00Z"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_unparseable_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("13/13/2024"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50"), Some(12.5));
        assert_eq!(parse_amount("-3"), Some(-3.0));
        assert_eq!(parse_amount(" 7 "), Some(7.0));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
    }

    #[test]
    fn test_non_numeric_amounts() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$12.50"), None);
        assert_eq!(parse_amount("1,200"), None);
        assert_eq!(parse_amount("twelve"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_zero_is_present() {
        assert_eq!(parse_amount("0"), Some(0.0));
    }

    #[test]
    fn test_outer_whitespace() {
        assert!(has_outer_whitespace(" Bob"));
        assert!(has_outer_whitespace("Bob "));
        assert!(has_outer_whitespace("Bob\t"));
        assert!(!has_outer_whitespace("Bob Smith"));
        assert!(!has_outer_whitespace(""));
    }

    #[test]
    fn test_is_lowercase() {
        assert!(is_lowercase("alice@example.com"));
        assert!(!is_lowercase("Alice@Example.com"));
        assert!(is_lowercase(""));
    }
}
