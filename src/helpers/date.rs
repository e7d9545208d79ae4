//! Date helper functions

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Parse a front-matter date string.
///
/// Accepts plain dates, date-times with a space or `T` separator (with or
/// without fractional seconds), and RFC 3339. Values without an offset are
/// taken as UTC so that ordering does not depend on the machine's timezone.
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let offset_formats = ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"];
    for fmt in offset_formats {
        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let naive_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in naive_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Normalize a front-matter date string to ISO 8601, or pass it through
/// untouched when it cannot be parsed
pub fn iso_date(s: &str) -> String {
    parse_date_string(s)
        .map(|d| date_xml(&d))
        .unwrap_or_else(|| s.to_string())
}

/// Short `YYYY-MM-DD` form for listings
pub fn short_date(s: Option<&str>) -> String {
    match s.and_then(parse_date_string) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "----------".to_string(),
    }
}
