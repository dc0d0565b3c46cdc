//! Parsing of the legacy `day_of_week` column.
//!
//! Older rows store English day names, newer ones `"1"`..`"7"` with 1 = Monday.

use chrono::{Datelike, NaiveDate, Weekday};

/// Parses `"1"`..`"7"`, full or three-letter English day names (any case).
pub fn parse_day(raw: &str) -> Option<u8> {
    let value = raw.trim();

    if let Ok(n) = value.parse::<u8>() {
        return (1..=7).contains(&n).then_some(n);
    }

    value
        .parse::<Weekday>()
        .ok()
        .map(|day| day.number_from_monday() as u8)
}

/// Parses a JSON slot value that may be a number or a string.
pub fn parse_day_value(value: &serde_json::Value) -> Option<u8> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .filter(|n| (1..=7).contains(n))
            .map(|n| n as u8),
        serde_json::Value::String(s) => parse_day(s),
        _ => None,
    }
}

/// Canonical stored form.
pub fn normalize_day(raw: &str) -> Option<String> {
    parse_day(raw).map(|n| n.to_string())
}

pub fn day_of(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}
