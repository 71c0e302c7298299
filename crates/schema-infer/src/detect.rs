//! Value-shape and field-name predicates used by the classifier.
//!
//! Every predicate is total: a value that cannot be parsed simply does not
//! match.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use grid_core::FieldValue;
use regex::Regex;
use std::sync::LazyLock;

/// Name fragments that mark a money amount.
pub const CURRENCY_HINTS: &[&str] = &["price", "amount", "value", "cost", "salary", "budget"];

/// Name fragments that mark a rate or ratio.
pub const PERCENT_HINTS: &[&str] = &["rate", "percent", "yield", "ratio"];

/// Name fragments that mark a date or time.
pub const TEMPORAL_HINTS: &[&str] = &[
    "date",
    "time",
    "created",
    "updated",
    "timestamp",
    "birthday",
    "dob",
];

/// Name fragments that mark an email address.
pub const EMAIL_HINTS: &[&str] = &["email", "e-mail", "mail"];

/// Name fragments that mark a web link.
pub const URL_HINTS: &[&str] = &["url", "link", "website", "site", "web"];

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(T\d{2}:\d{2}:\d{2})?").expect("valid ISO date regex")
});

static US_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("valid M/D/YYYY regex"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?://|www\.)\S+").expect("valid URL regex"));

/// Datetime layouts tried after RFC 3339 and RFC 2822.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%a %b %d %Y",
];

/// Case-insensitive check for any of `hints` inside `key`.
pub fn name_hints(key: &str, hints: &[&str]) -> bool {
    let key = key.to_lowercase();
    hints.iter().any(|hint| key.contains(hint))
}

/// A boolean, or the literal string `"true"` / `"false"`.
pub fn is_boolean_like(value: &FieldValue) -> bool {
    match value {
        FieldValue::Bool(_) => true,
        FieldValue::String(s) => s == "true" || s == "false",
        _ => false,
    }
}

/// Numeric value of a number or a numeric string.
///
/// Strings are trimmed; empty strings and non-finite results do not count.
pub fn as_number(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Int64(i) => Some(*i as f64),
        FieldValue::Float64(f) if f.is_finite() => Some(*f),
        FieldValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Parse a date string into a naive (wall-clock) datetime.
pub fn parse_date_str(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Parse any value into a naive datetime, if it holds a date.
pub fn parse_date(value: &FieldValue) -> Option<NaiveDateTime> {
    if let Some(dt) = value.as_datetime() {
        return Some(dt.naive_utc());
    }
    value.as_str().and_then(parse_date_str)
}

/// Native timestamp, ISO-like or `M/D/YYYY` string, or any string that parses as a date.
pub fn is_date_like(value: &FieldValue) -> bool {
    match value {
        FieldValue::DateTime(_) => true,
        FieldValue::String(s) => {
            let trimmed = s.trim();
            ISO_DATE.is_match(trimmed) || US_DATE.is_match(trimmed) || parse_date_str(trimmed).is_some()
        }
        _ => false,
    }
}

/// Simple `local@domain.tld` shape.
pub fn looks_like_email(value: &FieldValue) -> bool {
    value.as_str().is_some_and(|s| EMAIL.is_match(s.trim()))
}

/// `http(s)://…` or `www.…` shape.
pub fn looks_like_url(value: &FieldValue) -> bool {
    value.as_str().is_some_and(|s| URL.is_match(s.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Utc};

    #[test]
    fn test_name_hints_case_insensitive() {
        assert!(name_hints("bidPrice", CURRENCY_HINTS));
        assert!(name_hints("MarketValue", CURRENCY_HINTS));
        assert!(name_hints("couponRate", PERCENT_HINTS));
        assert!(name_hints("ISSUE_DATE", TEMPORAL_HINTS));
        assert!(!name_hints("ytm", PERCENT_HINTS));
    }

    #[test]
    fn test_boolean_like() {
        assert!(is_boolean_like(&FieldValue::Bool(false)));
        assert!(is_boolean_like(&FieldValue::from("true")));
        assert!(!is_boolean_like(&FieldValue::from("TRUE")));
        assert!(!is_boolean_like(&FieldValue::Int64(1)));
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&FieldValue::Int64(3)), Some(3.0));
        assert_eq!(as_number(&FieldValue::from(" 4.5 ")), Some(4.5));
        assert_eq!(as_number(&FieldValue::from("1e3")), Some(1000.0));
        assert_eq!(as_number(&FieldValue::from("")), None);
        assert_eq!(as_number(&FieldValue::from("NaN")), None);
        assert_eq!(as_number(&FieldValue::from("12abc")), None);
        assert_eq!(as_number(&FieldValue::Bool(true)), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        for input in [
            "2024-01-05",
            "2024-01-05T00:00:00",
            "2024-01-05T00:00:00Z",
            "1/5/2024",
            "01/05/2024",
            "2024/01/05",
            "Jan 5, 2024",
            "5 January 2024",
        ] {
            let parsed = parse_date_str(input).unwrap_or_else(|| panic!("failed: {input}"));
            assert_eq!(parsed.date(), expected, "input: {input}");
        }
    }

    #[test]
    fn test_parse_date_keeps_time() {
        let parsed = parse_date_str("2024-03-01T14:30:00.250").unwrap();
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn test_parse_date_values() {
        let native = Utc.with_ymd_and_hms(2031, 11, 20, 8, 15, 0).unwrap();
        assert_eq!(
            parse_date(&FieldValue::DateTime(native)),
            Some(native.naive_utc())
        );
        assert_eq!(
            parse_date(&FieldValue::from("2024-01-05")).map(|dt| dt.date()),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(parse_date(&FieldValue::Int64(20240105)), None);
        assert_eq!(parse_date(&FieldValue::Null), None);
    }

    #[test]
    fn test_date_like() {
        let native = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        assert!(is_date_like(&FieldValue::DateTime(native)));
        assert!(is_date_like(&FieldValue::from("2024-01-05")));
        assert!(is_date_like(&FieldValue::from("12/31/2023")));
        assert!(is_date_like(&FieldValue::from("Tue, 1 Jul 2003 10:52:37 +0200")));
        assert!(!is_date_like(&FieldValue::from("Corporate Bond")));
        assert!(!is_date_like(&FieldValue::from("2024-13")));
        assert!(!is_date_like(&FieldValue::Int64(20240105)));
    }

    #[test]
    fn test_email_and_url_shapes() {
        assert!(looks_like_email(&FieldValue::from("desk@bank.com")));
        assert!(!looks_like_email(&FieldValue::from("desk at bank.com")));
        assert!(!looks_like_email(&FieldValue::from("@bank.com")));

        assert!(looks_like_url(&FieldValue::from("https://example.com/x")));
        assert!(looks_like_url(&FieldValue::from("HTTP://EXAMPLE.COM")));
        assert!(looks_like_url(&FieldValue::from("www.example.com")));
        assert!(!looks_like_url(&FieldValue::from("ftp://example.com")));
        assert!(!looks_like_url(&FieldValue::from("example.com")));
    }
}
