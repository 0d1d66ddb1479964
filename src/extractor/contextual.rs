//! Context-aware path extraction
//!
//! Used when no tracker convention matched. The key is built from the host
//! label, the path segment before the identifier, and the identifier prefix,
//! so that different sites (and different areas of one site) get different
//! keys.

use super::UrlParts;
use crate::models::{ExtractionResult, ExtractionRule};
use lazy_static::lazy_static;
use regex::Regex;

/// Contextual keys are cut to this many characters.
pub const MAX_CONTEXTUAL_KEY_LEN: usize = 20;

/// Identifier prefix that carries no information and is left out of keys.
const PLACEHOLDER_PREFIX: &str = "TICKET";

lazy_static! {
    static ref DASH_DELIMITED: Regex = Regex::new(r"(?i-u)/([A-Z0-9]+)-([0-9]+)(?:/|$)").unwrap();
    static ref UNDERSCORE_DELIMITED: Regex = Regex::new(r"(?i-u)/([A-Z0-9]+)_([0-9]+)(?:/|$)").unwrap();
    static ref DOT_DELIMITED: Regex = Regex::new(r"(?i-u)/([A-Z0-9]+)\.([0-9]+)(?:/|$)").unwrap();
    static ref CONCATENATED: Regex = Regex::new(r"(?i-u)/([A-Z]+)([0-9]+)(?:/|$)").unwrap();
    static ref NUMERIC_SEGMENT: Regex = Regex::new(r"/([0-9]+)(?:/|$)").unwrap();
}

/// Prefixed sub-rules in priority order, with the separator they keep in the identifier.
fn prefixed_rules() -> [(ExtractionRule, &'static Regex, &'static str); 4] {
    [
        (ExtractionRule::DashDelimited, &*DASH_DELIMITED, "-"),
        (ExtractionRule::UnderscoreDelimited, &*UNDERSCORE_DELIMITED, "_"),
        (ExtractionRule::DotDelimited, &*DOT_DELIMITED, "."),
        (ExtractionRule::Concatenated, &*CONCATENATED, ""),
    ]
}

pub fn extract_contextual(parts: &UrlParts) -> Option<ExtractionResult> {
    prefixed_rules()
        .into_iter()
        .find_map(|(rule, regex, separator)| prefixed(parts, rule, regex, separator))
        .or_else(|| numeric(parts))
}

fn prefixed(
    parts: &UrlParts,
    rule: ExtractionRule,
    regex: &Regex,
    separator: &str,
) -> Option<ExtractionResult> {
    let caps = regex.captures(&parts.path)?;
    let start = caps.get(0)?.start();
    let prefix = caps.get(1)?.as_str();
    let number = caps.get(2)?.as_str();

    let context = preceding_segment(&parts.path[..start]);
    let project_key = contextual_key(&parts.host_label, context, Some(prefix));

    // Keep the slash in front of the identifier.
    let base_url = format!("{}{}", parts.origin, &parts.path[..start + 1]);

    Some(ExtractionResult::new(
        rule,
        project_key,
        base_url,
        format!("{}{}{}", prefix, separator, number),
    ))
}

fn numeric(parts: &UrlParts) -> Option<ExtractionResult> {
    let caps = NUMERIC_SEGMENT.captures(&parts.path)?;
    let start = caps.get(0)?.start();
    let number = caps.get(1)?.as_str();

    let before = &parts.path[..start];
    let segments: Vec<&str> = before.split('/').filter(|s| !s.is_empty()).collect();
    let context = &segments[segments.len().saturating_sub(2)..];

    let project_key = std::iter::once(parts.host_label.as_str())
        .chain(context.iter().copied())
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join("_");

    Some(ExtractionResult::new(
        ExtractionRule::NumericPath,
        project_key,
        format!("{}{}/", parts.origin, before),
        number,
    ))
}

/// Last non-empty segment of the path that precedes the identifier.
fn preceding_segment(path_before: &str) -> Option<&str> {
    path_before.split('/').filter(|s| !s.is_empty()).last()
}

/// `HOST_CONTEXT_PREFIX`, uppercased and cut to [`MAX_CONTEXTUAL_KEY_LEN`].
pub fn contextual_key(host_label: &str, context: Option<&str>, prefix: Option<&str>) -> String {
    let mut parts = vec![host_label.to_uppercase()];

    if let Some(context) = context {
        parts.push(context.to_uppercase());
    }

    if let Some(prefix) = prefix.map(str::to_uppercase) {
        if prefix != PLACEHOLDER_PREFIX {
            parts.push(prefix);
        }
    }

    parts.join("_").chars().take(MAX_CONTEXTUAL_KEY_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract;
    use test_case::test_case;

    #[test_case("https://www.test1.com/projects/BUG-77", ExtractionRule::DashDelimited, "TEST1_PROJECTS_BUG", "https://www.test1.com/projects/", "BUG-77" ; "dash with context")]
    #[test_case("https://example.com/ABC-12", ExtractionRule::DashDelimited, "EXAMPLE_ABC", "https://example.com/", "ABC-12" ; "dash without context")]
    #[test_case("https://focus.example.com/ticket/TICKET-5", ExtractionRule::DashDelimited, "FOCUS_TICKET", "https://focus.example.com/ticket/", "TICKET-5" ; "placeholder prefix dropped")]
    #[test_case("https://tracker.example.org/workspaces/ABC-9", ExtractionRule::DashDelimited, "TRACKER_WORKSPACES_A", "https://tracker.example.org/workspaces/", "ABC-9" ; "key truncated")]
    #[test_case("https://wiki.example.com/pages/DOC_42/", ExtractionRule::UnderscoreDelimited, "WIKI_PAGES_DOC", "https://wiki.example.com/pages/", "DOC_42" ; "underscore")]
    #[test_case("https://docs.example.com/spec/RFC.9110", ExtractionRule::DotDelimited, "DOCS_SPEC_RFC", "https://docs.example.com/spec/", "RFC.9110" ; "dot")]
    #[test_case("https://app.example.com/cases/CS1234/details", ExtractionRule::Concatenated, "APP_CASES_CS", "https://app.example.com/cases/", "CS1234" ; "concatenated")]
    #[test_case("https://www.example.com/path/to/tickets/1234", ExtractionRule::NumericPath, "EXAMPLE_TO_TICKETS", "https://www.example.com/path/to/tickets/", "1234" ; "numeric keeps last two segments")]
    #[test_case("https://example.com/42", ExtractionRule::NumericPath, "EXAMPLE", "https://example.com/", "42" ; "numeric at root")]
    fn test_contextual_rules(url: &str, rule: ExtractionRule, key: &str, base: &str, ticket: &str) {
        let result = extract(url).unwrap();
        assert_eq!(result.rule, rule);
        assert_eq!(result.project_key, key);
        assert_eq!(result.base_url, base);
        assert_eq!(result.ticket_id, ticket);
    }

    #[test]
    fn test_dash_preferred_over_numeric_segment() {
        let result = extract("https://example.com/12/OPS-3").unwrap();
        assert_eq!(result.rule, ExtractionRule::DashDelimited);
        assert_eq!(result.project_key, "EXAMPLE_12_OPS");
    }

    #[test]
    fn test_contextual_key() {
        assert_eq!(contextual_key("site", None, None), "SITE");
        assert_eq!(contextual_key("site", Some("items"), Some("ticket")), "SITE_ITEMS");
        assert_eq!(
            contextual_key("averyveryverylonghost", Some("ctx"), Some("AB")),
            "AVERYVERYVERYLONGHOS"
        );
    }

    #[test]
    fn test_preceding_segment() {
        assert_eq!(preceding_segment("/a/b/"), Some("b"));
        assert_eq!(preceding_segment("/"), None);
        assert_eq!(preceding_segment(""), None);
    }
}
