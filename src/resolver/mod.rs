//! Identifier resolution: map free-form input to a pattern and `KEY-123`
//!
//! Order of attempts:
//! 1. `KEY-123` against every key, in store order
//! 2. `KEY123` against every key, longest key first
//! 3. the number alone against the selected pattern

use crate::error::{Error, Result};
use crate::models::{MatchKind, Pattern, Resolution};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref NON_DIGITS: Regex = Regex::new(r"[^0-9]").unwrap();
}

/// Resolve `input` against `patterns`, falling back to `selected`.
///
/// The returned pattern always borrows from `patterns`; a `selected` pattern
/// whose key is not in `patterns` counts as no selection.
pub fn resolve<'a>(
    input: &str,
    patterns: &'a [Pattern],
    selected: Option<&Pattern>,
) -> Result<Resolution<'a>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    if let Some(resolution) = match_dashed(input, patterns).or_else(|| match_concatenated(input, patterns)) {
        debug!("Resolved '{}' to {} ({:?})", input, resolution.ticket_id, resolution.kind);
        return Ok(resolution);
    }

    let selected = selected
        .and_then(|s| patterns.iter().find(|p| p.key == s.key))
        .ok_or(Error::NoPatternSelected)?;

    let number = strip_known_prefixes(input, patterns);
    let number = NON_DIGITS.replace_all(&number, "");
    if number.is_empty() {
        return Err(Error::InvalidTicketNumber(input.to_string()));
    }

    debug!("Resolved '{}' against selected pattern {}", input, selected.key);
    Ok(Resolution {
        pattern: selected,
        ticket_id: format!("{}-{}", selected.key.to_uppercase(), number),
        kind: MatchKind::Selected,
    })
}

fn match_dashed<'a>(input: &str, patterns: &'a [Pattern]) -> Option<Resolution<'a>> {
    patterns.iter().find_map(|pattern| {
        let number = capture_number(&format!(r"(?i-u)^{}-([0-9]+)$", regex::escape(&pattern.key)), input)?;
        Some(Resolution {
            pattern,
            ticket_id: format!("{}-{}", pattern.key.to_uppercase(), number),
            kind: MatchKind::Dashed,
        })
    })
}

fn match_concatenated<'a>(input: &str, patterns: &'a [Pattern]) -> Option<Resolution<'a>> {
    // Longest key first so AB cannot claim ABCD42.
    let mut by_length: Vec<&Pattern> = patterns.iter().collect();
    by_length.sort_by(|a, b| b.key.len().cmp(&a.key.len()));

    by_length.into_iter().find_map(|pattern| {
        let number = capture_number(&format!(r"(?i-u)^{}([0-9]+)$", regex::escape(&pattern.key)), input)?;
        Some(Resolution {
            pattern,
            ticket_id: format!("{}-{}", pattern.key.to_uppercase(), number),
            kind: MatchKind::Concatenated,
        })
    })
}

fn capture_number(expression: &str, input: &str) -> Option<String> {
    let regex = Regex::new(expression).ok()?;
    regex
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Remove any registered key (with optional dash) from the front of the input.
fn strip_known_prefixes(input: &str, patterns: &[Pattern]) -> String {
    patterns.iter().fold(input.to_string(), |acc, pattern| {
        match Regex::new(&format!(r"(?i-u)^{}-?", regex::escape(&pattern.key))) {
            Ok(prefix) => prefix.replace(&acc, "").into_owned(),
            Err(_) => acc,
        }
    })
}
