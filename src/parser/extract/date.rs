use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Date:\s*(\d{2}[-/]\d{2}[-/]\d{4})").unwrap());

/// `Date: 05/11/2025` → `05-11-2025 (Wednesday)`.
///
/// Digits that are not a real calendar date come back normalized but without
/// the weekday. Returns an empty string when the page has no labeled date.
pub fn extract(text: &str) -> String {
    let Some(caps) = DATE_RE.captures(text) else {
        return String::new();
    };
    let raw = caps[1].replace('/', "-");
    match NaiveDate::parse_from_str(&raw, "%d-%m-%Y") {
        Ok(date) => format!("{} ({})", raw, date.format("%A")),
        Err(_) => raw,
    }
}
