//! Settings export and import

use super::PatternStore;
use crate::error::{Error, Result};
use crate::models::{SettingsDocument, SETTINGS_VERSION};
use log::warn;

/// Serialize the store as `{ "projects": [...], "version": "1.0" }`.
pub fn export_settings(store: &PatternStore) -> Result<String> {
    let document = SettingsDocument::new(store.patterns().to_vec());
    serde_json::to_string_pretty(&document).map_err(|e| Error::InvalidSettings(e.to_string()))
}

/// Parse a settings document. Comments and trailing commas are tolerated.
pub fn parse_settings(content: &str) -> Result<SettingsDocument> {
    let document: SettingsDocument =
        json5::from_str(content).map_err(|e| Error::InvalidSettings(e.to_string()))?;

    if document.version != SETTINGS_VERSION {
        warn!(
            "Settings version {} differs from {}; importing as-is",
            document.version, SETTINGS_VERSION
        );
    }

    Ok(document)
}

/// Replace the store's patterns with the imported ones. On any error the
/// store is left unchanged. Returns the number of imported patterns.
pub fn import_settings(store: &mut PatternStore, content: &str) -> Result<usize> {
    let document = parse_settings(content)?;
    let count = document.projects.len();
    store.replace_all(document.projects)?;
    Ok(count)
}
