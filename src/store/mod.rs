//! Pattern store: the ordered collection of registered patterns plus the
//! current selection

pub mod settings;
pub mod persistence;

use crate::error::{Error, Result};
use crate::models::{sanitize_key, ExtractionResult, Pattern, Resolution, StoreState};
use crate::resolver;
use crate::utils::helpers::suggest_display_name;
use log::info;

/// What to do when a pattern is added under a key that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    Reject,
    Overwrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated,
}

/// User edits applied on top of an extraction before it is stored.
#[derive(Debug, Clone, Default)]
pub struct PatternOverrides {
    pub key: Option<String>,
    pub base_url: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PatternStore {
    patterns: Vec<Pattern>,
    selected: Option<String>,
    auto_select_single: bool,
}

impl Default for PatternStore {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            selected: None,
            auto_select_single: true,
        }
    }
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from persisted state. Records are validated; the last
    /// selection is kept only if its key still exists. The auto-select policy
    /// applies before the selection is settled.
    pub fn from_state(state: StoreState, auto_select_single: bool) -> Result<Self> {
        let mut store = Self {
            patterns: validate_all(state.projects)?,
            selected: state.last_selected_project,
            auto_select_single,
        };
        store.refresh_selection();
        Ok(store)
    }

    pub fn to_state(&self) -> StoreState {
        StoreState {
            projects: self.patterns.clone(),
            last_selected_project: self.selected.clone(),
        }
    }

    /// Whether a lone pattern is selected automatically.
    pub fn with_auto_select(mut self, enabled: bool) -> Self {
        self.auto_select_single = enabled;
        self.refresh_selection();
        self
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Pattern> {
        let key = key.trim().to_uppercase();
        self.patterns.iter().find(|p| p.key == key)
    }

    pub fn selected(&self) -> Option<&Pattern> {
        self.selected.as_deref().and_then(|key| self.get(key))
    }

    /// Add a pattern, or update it in place when the key exists and the
    /// policy allows it. The pattern becomes the selection either way.
    pub fn add(
        &mut self,
        key: &str,
        base_url: &str,
        display_name: &str,
        policy: DuplicatePolicy,
    ) -> Result<AddOutcome> {
        let pattern = Pattern::new(key, base_url, display_name)?;
        self.insert(pattern, policy)
    }

    /// Store the pattern an extraction suggests, with optional user edits.
    pub fn add_from_extraction(
        &mut self,
        extraction: &ExtractionResult,
        overrides: PatternOverrides,
        policy: DuplicatePolicy,
    ) -> Result<AddOutcome> {
        let pattern = pattern_from_extraction(extraction, overrides)?;
        self.insert(pattern, policy)
    }

    pub fn insert(&mut self, pattern: Pattern, policy: DuplicatePolicy) -> Result<AddOutcome> {
        let pattern = pattern.validated()?;
        let key = pattern.key.clone();

        let outcome = match self.patterns.iter_mut().find(|p| p.key == key) {
            Some(_) if policy == DuplicatePolicy::Reject => {
                return Err(Error::DuplicateKey(key));
            }
            Some(existing) => {
                existing.base_url = pattern.base_url;
                existing.display_name = pattern.display_name;
                AddOutcome::Updated
            }
            None => {
                self.patterns.push(pattern);
                AddOutcome::Added
            }
        };

        info!("Pattern {} {:?}", key, outcome);
        self.selected = Some(key);
        self.refresh_selection();
        Ok(outcome)
    }

    pub fn remove(&mut self, key: &str) -> Result<Pattern> {
        let key = key.trim().to_uppercase();
        let index = self
            .patterns
            .iter()
            .position(|p| p.key == key)
            .ok_or_else(|| Error::UnknownPattern(key.clone()))?;

        let removed = self.patterns.remove(index);
        if self.selected.as_deref() == Some(key.as_str()) {
            self.selected = None;
        }

        info!("Removed pattern {}", key);
        self.refresh_selection();
        Ok(removed)
    }

    pub fn rename(&mut self, key: &str, display_name: &str) -> Result<()> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(Error::EmptyDisplayName);
        }

        let key = key.trim().to_uppercase();
        let pattern = self
            .patterns
            .iter_mut()
            .find(|p| p.key == key)
            .ok_or_else(|| Error::UnknownPattern(key.clone()))?;

        pattern.display_name = display_name.to_string();
        info!("Renamed pattern {} to {}", key, display_name);
        Ok(())
    }

    pub fn select(&mut self, key: &str) -> Result<&Pattern> {
        let key = key.trim().to_uppercase();
        if self.get(&key).is_none() {
            return Err(Error::UnknownPattern(key));
        }
        self.selected = Some(key);
        self.selected().ok_or(Error::NoPatternSelected)
    }

    /// Re-apply a selection remembered outside the store. A key that no
    /// longer exists is dropped rather than reported.
    pub fn restore_selection(&mut self, key: Option<&str>) {
        self.selected = key.map(|k| k.trim().to_uppercase());
        self.refresh_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.refresh_selection();
    }

    /// Replace every pattern at once. Nothing changes if any record is invalid.
    pub fn replace_all(&mut self, patterns: Vec<Pattern>) -> Result<()> {
        self.patterns = validate_all(patterns)?;
        info!("Replaced store with {} patterns", self.patterns.len());
        self.refresh_selection();
        Ok(())
    }

    pub fn resolve(&self, input: &str) -> Result<Resolution<'_>> {
        resolver::resolve(input, &self.patterns, self.selected())
    }

    /// Resolve the input, move the selection to the pattern it named and
    /// return the full URL to navigate to.
    pub fn open(&mut self, input: &str) -> Result<String> {
        let (key, url) = {
            let resolution = self.resolve(input)?;
            (resolution.pattern.key.clone(), resolution.url())
        };
        self.selected = Some(key);
        Ok(url)
    }

    /// Drop a selection that no longer exists; pick the only pattern when
    /// there is exactly one.
    fn refresh_selection(&mut self) {
        if let Some(key) = &self.selected {
            if !self.patterns.iter().any(|p| &p.key == key) {
                self.selected = None;
            }
        }

        if self.auto_select_single && self.patterns.len() == 1 {
            self.selected = Some(self.patterns[0].key.clone());
        }
    }
}

/// Build the pattern an extraction suggests. Extracted keys may contain
/// separators (`OWNER-REPO`, `HOST_PATH_KEY`) that a stored key cannot.
pub fn pattern_from_extraction(
    extraction: &ExtractionResult,
    overrides: PatternOverrides,
) -> Result<Pattern> {
    let key = overrides
        .key
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| sanitize_key(&extraction.project_key));
    let base_url = overrides
        .base_url
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| extraction.base_url.clone());
    let display_name = overrides
        .display_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| suggest_display_name(&key));

    Pattern::new(key, base_url, display_name)
}

fn validate_all(patterns: Vec<Pattern>) -> Result<Vec<Pattern>> {
    let patterns = patterns
        .into_iter()
        .map(Pattern::validated)
        .collect::<Result<Vec<_>>>()?;

    for (i, pattern) in patterns.iter().enumerate() {
        if patterns[..i].iter().any(|p| p.key == pattern.key) {
            return Err(Error::DuplicateKey(pattern.key.clone()));
        }
    }

    Ok(patterns)
}
