//! Pattern store workflow tests: register, open, export, import

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use url_opener::store::persistence::{load_store, save_store};
use url_opener::store::settings::{export_settings, import_settings};
use url_opener::{
    register_url, resolve, AddOutcome, DuplicatePolicy, Error, MatchKind, Pattern, PatternOverrides,
    PatternStore, RegisterOptions,
};

fn pattern(key: &str, base: &str) -> Pattern {
    Pattern::new(key, base, "").unwrap()
}

#[test]
fn test_resolver_contract() {
    let patterns = vec![
        pattern("ABC", "https://example.com/browse/"),
        pattern("AB", "https://ab.example.com/"),
        pattern("ABCD", "https://abcd.example.com/"),
    ];

    let dashed = resolve("ABC-7", &patterns, None).unwrap();
    assert_eq!(dashed.pattern, &patterns[0]);
    assert_eq!(dashed.ticket_id, "ABC-7");

    let concatenated = resolve("ABCD42", &patterns, None).unwrap();
    assert_eq!(concatenated.pattern.key, "ABCD");
    assert_eq!(concatenated.ticket_id, "ABCD-42");
    assert_eq!(concatenated.kind, MatchKind::Concatenated);

    assert_eq!(resolve("", &patterns, None), Err(Error::EmptyInput));
    assert_eq!(resolve("77", &patterns, None), Err(Error::NoPatternSelected));
}

#[test]
fn test_register_then_open() {
    let mut store = PatternStore::new();
    let (extraction, outcome) = register_url(
        &mut store,
        "https://jira.example.com/browse/PROJ-123",
        RegisterOptions::default(),
    )
    .unwrap();

    assert_eq!(extraction.project_key, "PROJ");
    assert_eq!(outcome, AddOutcome::Added);
    assert_eq!(store.get("PROJ").unwrap().display_name, "Project");

    assert_eq!(store.open("123").unwrap(), "https://jira.example.com/browse/PROJ-123");
    assert_eq!(store.open("proj456").unwrap(), "https://jira.example.com/browse/PROJ-456");
}

#[test]
fn test_register_duplicate_policies() {
    let mut store = PatternStore::new();
    register_url(&mut store, "https://a.example.com/browse/OPS-1", RegisterOptions::default()).unwrap();

    let err = register_url(&mut store, "https://b.example.com/browse/OPS-2", RegisterOptions::default())
        .unwrap_err();
    assert_eq!(err, Error::DuplicateKey("OPS".to_string()));
    assert_eq!(store.get("OPS").unwrap().base_url, "https://a.example.com/browse/");

    let options = RegisterOptions {
        overrides: PatternOverrides {
            display_name: Some("Operations".to_string()),
            ..Default::default()
        },
        on_duplicate: DuplicatePolicy::Overwrite,
    };
    let (_, outcome) = register_url(&mut store, "https://b.example.com/browse/OPS-2", options).unwrap();
    assert_eq!(outcome, AddOutcome::Updated);
    assert_eq!(store.get("OPS").unwrap().base_url, "https://b.example.com/browse/");
    assert_eq!(store.get("OPS").unwrap().display_name, "Operations");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_export_import_round_trip() {
    let mut store = PatternStore::new();
    store.add("ZED", "https://z.example.com/", "Last letter", DuplicatePolicy::Reject).unwrap();
    store.add("ABC", "https://example.com/browse/", "", DuplicatePolicy::Reject).unwrap();
    store.add("INC", "https://sn.example.com/nav_to.do?uri=", "Incident", DuplicatePolicy::Reject).unwrap();

    let exported = export_settings(&store).unwrap();

    let mut imported = PatternStore::new();
    assert_eq!(import_settings(&mut imported, &exported).unwrap(), 3);
    assert_eq!(imported.patterns(), store.patterns());
}

#[test]
fn test_import_clears_missing_selection() {
    let mut store = PatternStore::new();
    store.add("OLD", "https://old.example.com/", "", DuplicatePolicy::Reject).unwrap();
    store.add("KEEP", "https://keep.example.com/", "", DuplicatePolicy::Reject).unwrap();
    store.select("OLD").unwrap();

    let settings = r#"{
        "projects": [
            { "key": "KEEP", "url": "https://keep.example.com/", "displayName": "KEEP" },
            { "key": "NEW", "url": "https://new.example.com/", "displayName": "New" }
        ],
        "version": "1.0"
    }"#;
    import_settings(&mut store, settings).unwrap();
    assert!(store.selected().is_none());
    assert_eq!(store.open("5"), Err(Error::NoPatternSelected));
}

#[test]
fn test_state_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("patterns.json");

    let mut store = PatternStore::new();
    store.add("ABC", "https://example.com/a/", "", DuplicatePolicy::Reject).unwrap();
    store.add("XYZ", "https://example.com/x/", "", DuplicatePolicy::Reject).unwrap();
    store.open("abc-9").unwrap();
    save_store(&store, &path).unwrap();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["lastSelectedProject"], "ABC");

    let mut reloaded = load_store(&path, true).unwrap();
    assert_eq!(reloaded.open("10").unwrap(), "https://example.com/a/ABC-10");
}
