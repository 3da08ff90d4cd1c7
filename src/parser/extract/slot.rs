use std::sync::LazyLock;

use regex::Regex;

static SLOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bslot\s*:?\s*([a-z])\s*(?:\(([^)]+)\)|(\d{1,2}:\d{2}\s*[ap]m\s*[-–]\s*\d{1,2}:\d{2}\s*[ap]m))",
    )
    .unwrap()
});

/// Cheap gate the walker uses before running the full pattern.
pub fn mentions_slot(text: &str) -> bool {
    text.to_lowercase().contains("slot")
}

/// `Slot: b (11:30 AM - 01:00 PM)` or `Slot B 11:30 AM – 01:00 PM`
/// → `Slot B (11:30 AM - 01:00 PM)`.
pub fn extract(text: &str) -> String {
    let Some(caps) = SLOT_RE.captures(text) else {
        return String::new();
    };
    let letter = caps[1].to_uppercase();
    let range = caps
        .get(2)
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().trim())
        .unwrap_or_default();
    format!("Slot {} ({})", letter, range)
}
