//! Interactive CLI mode for URL Opener

use super::{add_with_confirmation, print_added, print_extraction, print_patterns};
use crate::config::Config;
use crate::extractor::extract;
use crate::models::sanitize_key;
use crate::store::persistence::{load_store, save_store};
use crate::store::settings::{export_settings, import_settings};
use crate::store::{pattern_from_extraction, PatternOverrides, PatternStore};
use crate::utils::{sample_url, suggest_display_name};
use crate::Pattern;
use anyhow::Result;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_EXPORT_FILE: &str = "url-opener-settings.json";

/// Run the interactive CLI mode
pub fn run_interactive_mode(store_path: &Path, config: &Config) -> Result<()> {
    print_banner();

    let mut store = load_store(store_path, config.auto_select_single)?;

    loop {
        println!();
        let options = vec![
            "🚀 Open ticket",
            "➕ Add pattern from URL",
            "✏️  Add pattern manually",
            "🎯 Select pattern",
            "🗂  Manage patterns",
            "📤 Export settings",
            "📥 Import settings",
            "❌ Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact()?;

        let changed = match selection {
            0 => handle_open(&mut store)?,
            1 => handle_add_from_url(&mut store)?,
            2 => handle_add_manual(&mut store)?,
            3 => handle_select(&mut store)?,
            4 => handle_manage(&mut store)?,
            5 => {
                handle_export(&store)?;
                false
            }
            6 => handle_import(&mut store)?,
            7 => {
                println!("\n{}", "Bye! 👋".green().bold());
                break;
            }
            _ => unreachable!(),
        };

        if changed {
            save_store(&store, store_path)?;
        }
    }

    Ok(())
}

fn print_banner() {
    println!("{}", "╔═══════════════════════════════════════════════╗".blue());
    println!("{}", "║                                               ║".blue());
    println!("{}", "║     🔗 URL Opener                             ║".blue().bold());
    println!("{}", "║                                               ║".blue());
    println!("{}", "║     Type PROJ-123, get the full URL           ║".blue());
    println!("{}", "║                                               ║".blue());
    println!("{}", "╚═══════════════════════════════════════════════╝".blue());
}

/// Prompt for an identifier and print the composed URL.
pub fn prompt_and_open(store: &mut PatternStore) -> Result<Option<String>> {
    if store.is_empty() {
        println!("{}", "No patterns configured. Add one first.".yellow());
        return Ok(None);
    }

    let prompt = match store.selected() {
        Some(pattern) => format!("{}-", pattern.key),
        None => "Ticket (select a pattern first or type PROJ-123)".to_string(),
    };

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;

    match store.open(&input) {
        Ok(url) => {
            println!("{}", url.green().bold());
            Ok(Some(url))
        }
        Err(e) => {
            println!("{}", format!("❌ {}", e).red());
            Ok(None)
        }
    }
}

fn handle_open(store: &mut PatternStore) -> Result<bool> {
    Ok(prompt_and_open(store)?.is_some())
}

fn handle_add_from_url(store: &mut PatternStore) -> Result<bool> {
    println!("\n{}", "=== Add Pattern from URL ===".blue().bold());

    let url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Paste an example URL")
        .interact_text()?;

    let extraction = match extract(&url) {
        Ok(extraction) => extraction,
        Err(e) => {
            println!("{}", format!("❌ {}", e).red());
            return Ok(false);
        }
    };

    print_extraction(&extraction);
    println!();

    // Let the user adjust the suggestion before it is stored.
    let key: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Pattern key")
        .with_initial_text(sanitize_key(&extraction.project_key))
        .interact_text()?;
    let display_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Display name")
        .with_initial_text(suggest_display_name(&key))
        .interact_text()?;
    let base_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Base URL")
        .with_initial_text(extraction.base_url.clone())
        .interact_text()?;

    if let Some(sample) = sample_url(&key, &base_url) {
        println!("  Sample: {}", sample.dimmed());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Add this pattern?")
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(false);
    }

    let overrides = PatternOverrides {
        key: Some(key),
        base_url: Some(base_url),
        display_name: Some(display_name),
    };
    match pattern_from_extraction(&extraction, overrides) {
        Ok(pattern) => add_pattern(store, pattern),
        Err(e) => {
            println!("{}", format!("❌ {}", e).red());
            Ok(false)
        }
    }
}

fn handle_add_manual(store: &mut PatternStore) -> Result<bool> {
    println!("\n{}", "=== Add Pattern ===".blue().bold());

    let key: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Pattern key (letters and numbers)")
        .interact_text()?;
    let base_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Base URL")
        .with_initial_text("https://")
        .interact_text()?;
    let display_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Display name")
        .allow_empty(true)
        .interact_text()?;

    match Pattern::new(&key, &base_url, &display_name) {
        Ok(pattern) => add_pattern(store, pattern),
        Err(e) => {
            println!("{}", format!("❌ {}", e).red());
            Ok(false)
        }
    }
}

fn add_pattern(store: &mut PatternStore, pattern: Pattern) -> Result<bool> {
    match add_with_confirmation(store, pattern.clone(), false)? {
        Some(outcome) => {
            if let Some(stored) = store.get(&pattern.key) {
                print_added(stored, outcome);
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

fn choose_pattern(store: &PatternStore, prompt: &str) -> Result<Option<String>> {
    if store.is_empty() {
        println!("{}", "No patterns configured yet.".yellow());
        return Ok(None);
    }

    let labels: Vec<String> = store.patterns().iter().map(Pattern::label).collect();
    let default = store
        .selected()
        .and_then(|s| store.patterns().iter().position(|p| p.key == s.key))
        .unwrap_or(0);

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(Some(store.patterns()[index].key.clone()))
}

fn handle_select(store: &mut PatternStore) -> Result<bool> {
    let Some(key) = choose_pattern(store, "Select pattern")? else {
        return Ok(false);
    };
    store.select(&key)?;
    println!("{}", format!("Selected {}", key).green());
    Ok(true)
}

fn handle_manage(store: &mut PatternStore) -> Result<bool> {
    println!();
    print_patterns(store);
    println!();

    let Some(key) = choose_pattern(store, "Pattern to manage")? else {
        return Ok(false);
    };

    let actions = vec!["✏️  Rename", "🗑  Delete", "↩️  Back"];
    let action = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("What should happen to {}?", key))
        .items(&actions)
        .default(0)
        .interact()?;

    match action {
        0 => {
            let current = store.get(&key).map(|p| p.display_name.clone()).unwrap_or_default();
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Display name")
                .with_initial_text(current)
                .interact_text()?;
            match store.rename(&key, &name) {
                Ok(()) => Ok(true),
                Err(e) => {
                    println!("{}", format!("❌ {}", e).red());
                    Ok(false)
                }
            }
        }
        1 => {
            let label = store.get(&key).map(Pattern::label).unwrap_or_else(|| key.clone());
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Delete pattern {}?", label))
                .default(false)
                .interact()?;
            if confirmed {
                store.remove(&key)?;
                println!("{}", format!("Deleted {}", key).green());
            }
            Ok(confirmed)
        }
        _ => Ok(false),
    }
}

fn handle_export(store: &PatternStore) -> Result<()> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("📂 Export to")
        .with_initial_text(DEFAULT_EXPORT_FILE)
        .interact_text()?;

    fs::write(&path, export_settings(store)?)?;
    println!("{}", format!("✅ Exported {} patterns to {}", store.len(), path).green());
    Ok(())
}

fn handle_import(store: &mut PatternStore) -> Result<bool> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("📂 Import from")
        .with_initial_text(DEFAULT_EXPORT_FILE)
        .interact_text()?;

    let content = match fs::read_to_string(PathBuf::from(&path)) {
        Ok(content) => content,
        Err(e) => {
            println!("{}", format!("❌ Error reading settings file: {}", e).red());
            return Ok(false);
        }
    };

    match import_settings(store, &content) {
        Ok(count) => {
            println!("{}", format!("✅ Imported {} patterns", count).green());
            Ok(true)
        }
        Err(e) => {
            println!("{}", format!("❌ {}", e).red());
            Ok(false)
        }
    }
}
