//! String cleanup for headers, tee times and player names.

use crate::constants::{TIME_DISPLAY_FORMAT, TIME_PARSE_FORMAT};
use crate::error::{ExportError, Result};
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; other scripts' numerals are not group numbers.
static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());
static NON_TIME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9:APM]").unwrap());
static ORDINAL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s*").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Extract the group number from a label like "Group 7".
///
/// Returns 0 when the label has no digits, which happens on malformed headers.
pub fn parse_group_number(segment: &str) -> u32 {
    FIRST_NUMBER
        .find(segment)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Parse a 12-hour clock string such as "9:06AM" after stripping noise.
pub fn parse_clock(raw: &str) -> Result<NaiveTime> {
    let upper = raw.trim().to_uppercase();
    let cleaned = NON_TIME_CHARS.replace_all(&upper, "");
    NaiveTime::parse_from_str(&cleaned, TIME_PARSE_FORMAT)
        .map_err(|_| ExportError::time_format(raw.trim()))
}

/// Normalize a tee time label: `" 9:06 am "` becomes `"9:06AM"`.
pub fn parse_time_label(raw: &str) -> Result<String> {
    let time = parse_clock(raw)?;
    Ok(time.format(TIME_DISPLAY_FORMAT).to_string())
}

/// Remove the "1. " ordinal prefix and tidy whitespace in a player line.
pub fn clean_player_text(raw: &str) -> String {
    let without_ordinal = ORDINAL_PREFIX.replace(raw.trim(), "");
    WHITESPACE_RUN
        .replace_all(&without_ordinal, " ")
        .trim()
        .to_string()
}

/// Split a cleaned name into (first, last) on the first space.
pub fn split_name(cleaned: &str) -> (String, String) {
    match cleaned.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (cleaned.to_string(), String::new()),
    }
}
