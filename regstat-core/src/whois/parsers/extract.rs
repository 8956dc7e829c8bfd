//! Line matching and the field extractors the rule tables are built from.
//!
//! Registries write facts as `Label: value` lines but disagree on labels,
//! capitalization and trailing noise, so everything here takes its
//! pattern from the caller and knows nothing about a particular registry.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Value after the first `: ` that runs to end of line using only
/// letters, digits, `-`, `:` and whitespace.
static DATE_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i):\s+([a-z0-9\-:\s]+)$").expect("Invalid date value regex"));

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%a %b %d %Y",
    "%A %B %d %Y",
    "%d-%m-%Y",
    "%Y%m%d",
];

/// Lines whose trimmed content matches `pattern`, in reply order.
pub fn matching_lines<'a>(lines: &'a [String], pattern: &Regex) -> Vec<&'a str> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| pattern.is_match(line))
        .collect()
}

pub fn first_match<'a>(lines: &'a [String], pattern: &Regex) -> Option<&'a str> {
    lines
        .iter()
        .map(|line| line.trim())
        .find(|line| pattern.is_match(line))
}

/// Reads the trailing date value of a `Label: value` line.
///
/// Returns `None` when the line carries no such value or the value is not
/// a date any registry in the table is known to write.
pub fn extract_date(line: &str) -> Option<NaiveDate> {
    let caps = DATE_VALUE.captures(line)?;
    parse_date(caps.get(1)?.as_str())
}

/// First capture of `pattern` from each line; lines without a match are
/// skipped.
pub fn extract_status_codes(lines: &[&str], pattern: &Regex) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| extract_state(line, pattern))
        .collect()
}

pub fn extract_state(line: &str, pattern: &Regex) -> Option<String> {
    let value = pattern.captures(line)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let cleaned = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&cleaned) {
        return Some(dt.date_naive());
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return Some(date);
        }
    }

    // A weekday that disagrees with the date makes chrono reject the whole
    // string, so retry without it.
    let (head, tail) = cleaned.split_once(' ')?;
    if head.chars().all(|c| c.is_ascii_alphabetic()) && head.len() >= 3 {
        for fmt in ["%b %d %Y", "%B %d %Y", "%b %d %H:%M:%S %Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(tail, fmt) {
                return Some(date);
            }
        }
    }

    None
}
