//! WebAssembly bindings for the extension popup
//!
//! The popup owns storage and rendering; it passes the stored state in as
//! JSON and gets JSON back.

use crate::models::StoreState;
use crate::store::settings::{export_settings as export_store, import_settings as import_into};
use crate::PatternStore;
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format_args!($($t)*).to_string().into()))
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn store_from_json(store_json: &str) -> Result<PatternStore, JsValue> {
    let state: StoreState = serde_json::from_str(store_json).map_err(to_js_error)?;
    PatternStore::from_state(state, true).map_err(to_js_error)
}

/// Infer `{projectKey, baseUrl, ticketId, rule}` from an example URL
#[wasm_bindgen]
pub fn extract_pattern(url: &str) -> Result<String, JsValue> {
    let extraction = crate::extract(url).map_err(to_js_error)?;
    console_log!("Extracted {} via {} rule", extraction.project_key, extraction.rule);
    serde_json::to_string(&extraction).map_err(to_js_error)
}

/// Resolve typed text against the stored patterns.
/// Returns `{pattern, ticketId, url}`.
#[wasm_bindgen]
pub fn resolve_ticket(input: &str, store_json: &str, selected_key: Option<String>) -> Result<String, JsValue> {
    let mut store = store_from_json(store_json)?;
    if selected_key.is_some() {
        store.restore_selection(selected_key.as_deref());
    }

    let resolution = store.resolve(input).map_err(to_js_error)?;
    let response = serde_json::json!({
        "pattern": resolution.pattern,
        "ticketId": resolution.ticket_id,
        "url": resolution.url(),
    });

    serde_json::to_string(&response).map_err(to_js_error)
}

/// Export stored state as a settings document
#[wasm_bindgen]
pub fn export_settings(store_json: &str) -> Result<String, JsValue> {
    let store = store_from_json(store_json)?;
    export_store(&store).map_err(to_js_error)
}

/// Validate an imported settings document against the current state and
/// return the new state to persist
#[wasm_bindgen]
pub fn import_settings(store_json: &str, settings_json: &str) -> Result<String, JsValue> {
    let mut store = store_from_json(store_json)?;
    let count = import_into(&mut store, settings_json).map_err(to_js_error)?;
    console_log!("Imported {} patterns", count);
    serde_json::to_string(&store.to_state()).map_err(to_js_error)
}
