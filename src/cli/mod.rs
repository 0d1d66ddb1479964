//! Command-line host: prompts and terminal output shared by the subcommands
//! and the interactive mode

pub mod interactive;

use crate::error::Error;
use crate::models::{ExtractionResult, Pattern};
use crate::store::{AddOutcome, DuplicatePolicy, PatternStore};
use crate::utils::sample_url;
use anyhow::Result;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Insert a pattern, asking before overwriting an existing key unless
/// `assume_yes` is set. Returns `None` when the user declines.
pub fn add_with_confirmation(
    store: &mut PatternStore,
    pattern: Pattern,
    assume_yes: bool,
) -> Result<Option<AddOutcome>> {
    match store.insert(pattern.clone(), DuplicatePolicy::Reject) {
        Ok(outcome) => Ok(Some(outcome)),
        Err(Error::DuplicateKey(key)) => {
            let overwrite = assume_yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Pattern \"{}\" already exists. Do you want to update it?", key))
                    .default(false)
                    .interact()?;

            if overwrite {
                Ok(Some(store.insert(pattern, DuplicatePolicy::Overwrite)?))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(e.into()),
    }
}

pub fn print_added(pattern: &Pattern, outcome: AddOutcome) {
    let verb = match outcome {
        AddOutcome::Added => "added",
        AddOutcome::Updated => "updated",
    };
    println!(
        "{}",
        format!("✅ Pattern \"{}\" ({}) {} successfully!", pattern.display_name, pattern.key, verb)
            .green()
            .bold()
    );
}

pub fn print_extraction(extraction: &ExtractionResult) {
    println!("{}", "🔍 Extracted pattern".bold().blue());
    println!("  Key:       {}", extraction.project_key.cyan());
    println!("  Base URL:  {}", extraction.base_url);
    println!("  Ticket:    {}", extraction.ticket_id);
    println!("  Rule:      {}", extraction.rule.to_string().dimmed());
    if let Some(sample) = sample_url(&extraction.project_key, &extraction.base_url) {
        println!("  Sample:    {}", sample.dimmed());
    }
}

pub fn print_patterns(store: &PatternStore) {
    if store.is_empty() {
        println!("{}", "No patterns configured yet.".yellow());
        return;
    }

    let selected = store.selected().map(|p| p.key.as_str());
    for pattern in store.patterns() {
        let marker = if Some(pattern.key.as_str()) == selected {
            "●".green()
        } else {
            "○".dimmed()
        };
        println!("{} {}", marker, pattern.label().bold());
        println!("    {}", pattern.base_url.dimmed());
    }
}

pub fn print_error(context: &str, err: &anyhow::Error) {
    eprintln!("{}", format!("❌ {}", context).red().bold());
    eprintln!("{}", format!("Error: {}", err).red());
}
