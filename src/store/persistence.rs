//! Reading and writing the store state file

use super::PatternStore;
use crate::models::StoreState;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Load the store from `path`. A missing file is an empty store.
pub fn load_store(path: &Path, auto_select_single: bool) -> Result<PatternStore> {
    if !path.exists() {
        debug!("No store at {}, starting empty", path.display());
        return Ok(PatternStore::new().with_auto_select(auto_select_single));
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let state: StoreState = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let store = PatternStore::from_state(state, auto_select_single)
        .with_context(|| format!("Invalid pattern in {}", path.display()))?;
    debug!("Loaded {} patterns from {}", store.len(), path.display());
    Ok(store)
}

/// Write the store to `path`, creating parent directories as needed.
pub fn save_store(store: &PatternStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(&store.to_state())
        .context("Failed to serialize pattern store")?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("Saved {} patterns to {}", store.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DuplicatePolicy;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = load_store(&temp_dir.path().join("patterns.json"), true).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_and_load_keeps_selection() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("patterns.json");

        let mut store = PatternStore::new();
        store.add("ABC", "https://example.com/a/", "", DuplicatePolicy::Reject).unwrap();
        store.add("DEF", "https://example.com/d/", "", DuplicatePolicy::Reject).unwrap();
        store.select("ABC").unwrap();
        save_store(&store, &path).unwrap();

        let loaded = load_store(&path, true).unwrap();
        assert_eq!(loaded.patterns(), store.patterns());
        assert_eq!(loaded.selected().unwrap().key, "ABC");
    }

    #[test]
    fn test_reads_popup_storage_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patterns.json");
        fs::write(
            &path,
            r#"{"projects":[{"key":"ABC","url":"https://example.com/browse/","displayName":"Alpha"}],"lastSelectedProject":"ABC"}"#,
        )
        .unwrap();

        let store = load_store(&path, true).unwrap();
        assert_eq!(store.selected().unwrap().display_name, "Alpha");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patterns.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_store(&path, true).is_err());
    }

    #[test]
    fn test_single_pattern_stays_unselected_when_auto_select_is_off() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patterns.json");
        fs::write(
            &path,
            r#"{"projects":[{"key":"ABC","url":"https://example.com/browse/","displayName":"Alpha"}]}"#,
        )
        .unwrap();

        assert!(load_store(&path, false).unwrap().selected().is_none());
        assert_eq!(load_store(&path, true).unwrap().selected().unwrap().key, "ABC");
    }
}
