//! Registered URL patterns

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref KEY_PATTERN: Regex = Regex::new(r"^[A-Z0-9]+$").unwrap();
}

/// A base URL plus the key used to compose identifiers like `KEY-123`.
///
/// Serialized with the field names the popup storage uses (`url`,
/// `displayName`) so exported settings stay interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub key: String,
    #[serde(rename = "url", alias = "baseUrl")]
    pub base_url: String,
    #[serde(default)]
    pub display_name: String,
}

impl Pattern {
    /// Build a validated pattern. The key is trimmed and uppercased; a blank
    /// display name falls back to the key.
    pub fn new(
        key: impl AsRef<str>,
        base_url: impl AsRef<str>,
        display_name: impl AsRef<str>,
    ) -> Result<Self> {
        let key = normalize_key(key.as_ref())?;
        let base_url = validate_base_url(base_url.as_ref())?;

        let display_name = match display_name.as_ref().trim() {
            "" => key.clone(),
            name => name.to_string(),
        };

        Ok(Self {
            key,
            base_url,
            display_name,
        })
    }

    /// Full URL for an identifier produced by the resolver.
    pub fn url_for(&self, ticket_id: &str) -> String {
        format!("{}{}", self.base_url, ticket_id)
    }

    /// "Display Name (KEY)", or just the key when the two are the same.
    pub fn label(&self) -> String {
        if self.display_name.is_empty() || self.display_name == self.key {
            self.key.clone()
        } else {
            format!("{} ({})", self.display_name, self.key)
        }
    }

    /// Re-check a pattern that came from outside (import, state file) and
    /// fill in the display name default.
    pub(crate) fn validated(self) -> Result<Self> {
        Self::new(&self.key, &self.base_url, &self.display_name)
    }
}

/// Trim and uppercase a key, rejecting anything outside `[A-Z0-9]`.
pub fn normalize_key(key: &str) -> Result<String> {
    let key = key.trim().to_uppercase();
    if KEY_PATTERN.is_match(&key) {
        Ok(key)
    } else {
        Err(Error::InvalidKey(key))
    }
}

/// Turn an arbitrary suggestion (e.g. `OWNER-REPO`, `HOST_PATH`) into a
/// storable key by dropping every character outside `[A-Z0-9]`.
pub fn sanitize_key(suggestion: &str) -> String {
    suggestion
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

fn validate_base_url(base_url: &str) -> Result<String> {
    let base_url = base_url.trim();
    if base_url.is_empty() {
        return Err(Error::InvalidBaseUrl(base_url.to_string()));
    }

    // Appending an identifier has to give something navigable.
    url::Url::parse(&format!("{}X-1", base_url))
        .map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))?;

    Ok(base_url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_key_and_display_name() {
        let pattern = Pattern::new(" proj ", "https://example.com/browse/", "").unwrap();
        assert_eq!(pattern.key, "PROJ");
        assert_eq!(pattern.display_name, "PROJ");
        assert_eq!(pattern.url_for("PROJ-123"), "https://example.com/browse/PROJ-123");
    }

    #[test]
    fn test_rejects_invalid_key() {
        let err = Pattern::new("PROJ-1", "https://example.com/", "x").unwrap_err();
        assert_eq!(err, Error::InvalidKey("PROJ-1".to_string()));
        assert!(Pattern::new("   ", "https://example.com/", "x").is_err());
    }

    #[test]
    fn test_rejects_relative_base_url() {
        assert!(matches!(
            Pattern::new("ABC", "browse/", ""),
            Err(Error::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            Pattern::new("ABC", "  ", ""),
            Err(Error::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_label() {
        let plain = Pattern::new("INC", "https://sn.example.com/nav_to.do?uri=", "").unwrap();
        assert_eq!(plain.label(), "INC");

        let named = Pattern::new("INC", "https://sn.example.com/nav_to.do?uri=", "Incident").unwrap();
        assert_eq!(named.label(), "Incident (INC)");
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("octo-repo"), "OCTOREPO");
        assert_eq!(sanitize_key("TEST1_PROJECTS_BUG"), "TEST1PROJECTSBUG");
    }

    #[test]
    fn test_deserialize_storage_shape() {
        let pattern: Pattern = serde_json::from_str(
            r#"{"key":"ABC","url":"https://example.com/browse/","displayName":"Alpha"}"#,
        )
        .unwrap();
        assert_eq!(pattern.base_url, "https://example.com/browse/");
        assert_eq!(pattern.display_name, "Alpha");

        let aliased: Pattern =
            serde_json::from_str(r#"{"key":"ABC","baseUrl":"https://example.com/"}"#).unwrap();
        assert_eq!(aliased.base_url, "https://example.com/");
        assert_eq!(aliased.display_name, "");
    }
}
