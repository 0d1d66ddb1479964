//! Exported settings and persisted store state

use super::Pattern;
use serde::{Deserialize, Serialize};

pub const SETTINGS_VERSION: &str = "1.0";

/// Export/import document: `{ "projects": [...], "version": "1.0" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDocument {
    pub projects: Vec<Pattern>,
    #[serde(default = "default_version")]
    pub version: String,
}

/// What the store writes to disk between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub projects: Vec<Pattern>,
    #[serde(default)]
    pub last_selected_project: Option<String>,
}

impl SettingsDocument {
    pub fn new(projects: Vec<Pattern>) -> Self {
        Self {
            projects,
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    SETTINGS_VERSION.to_string()
}
