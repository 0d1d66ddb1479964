//! Helper utility functions

/// Readable names for common identifier prefixes
static COMMON_NAMES: &[(&str, &str)] = &[
    ("PROJ", "Project"),
    ("INC", "Incident"),
    ("TASK", "Task"),
    ("BUG", "Bug Report"),
    ("ISSUE", "Issue"),
    ("ISSUES", "Issues"),
    ("TICKET", "Ticket"),
    ("REQ", "Request"),
];

/// Suggest a display name for a newly extracted key
pub fn suggest_display_name(key: &str) -> String {
    let upper = key.to_uppercase();
    COMMON_NAMES
        .iter()
        .find(|(prefix, _)| *prefix == upper)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Example URL shown before a pattern is confirmed
pub fn sample_url(key: &str, base_url: &str) -> Option<String> {
    let key = key.trim();
    let base_url = base_url.trim();
    if key.is_empty() || base_url.is_empty() {
        return None;
    }

    let ticket = if key.contains('-') {
        format!("{}-123", key)
    } else {
        format!("{}123", key)
    };
    Some(format!("{}{}", base_url, ticket))
}

/// Check if a string parses as an absolute URL
pub fn is_valid_url(s: &str) -> bool {
    url::Url::parse(s.trim()).is_ok()
}
