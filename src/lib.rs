//! URL Opener
//!
//! Register "patterns" (a base URL plus a short key) and compose full URLs
//! from identifiers like `PROJ-123`. The extractor infers a pattern from an
//! example URL; the resolver maps typed text to a pattern and identifier.

pub mod error;
pub mod models;
pub mod extractor;
pub mod resolver;
pub mod store;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{Error, Result};
pub use extractor::extract;
pub use models::{ExtractionResult, ExtractionRule, MatchKind, Pattern, Resolution, SettingsDocument};
pub use resolver::resolve;
pub use store::{AddOutcome, DuplicatePolicy, PatternOverrides, PatternStore};

/// Options for registering a pattern from an example URL
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    pub overrides: PatternOverrides,
    pub on_duplicate: DuplicatePolicy,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self {
            overrides: PatternOverrides::default(),
            on_duplicate: DuplicatePolicy::Reject,
        }
    }
}

/// Main entry point for adding a pattern from a pasted URL
pub fn register_url(
    store: &mut PatternStore,
    url: &str,
    options: RegisterOptions,
) -> Result<(ExtractionResult, AddOutcome)> {
    // 1. Infer key, base URL and identifier
    let extraction = extract(url)?;

    // 2. Apply user edits and store it
    let outcome = store.add_from_extraction(&extraction, options.overrides, options.on_duplicate)?;

    Ok((extraction, outcome))
}
