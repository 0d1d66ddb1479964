//! URL Opener CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use url_opener::cli::interactive::{prompt_and_open, run_interactive_mode};
use url_opener::cli::{add_with_confirmation, print_added, print_error, print_extraction, print_patterns};
use url_opener::config::{load_config, Config};
use url_opener::store::pattern_from_extraction;
use url_opener::store::persistence::{load_store, save_store};
use url_opener::store::settings::{export_settings, import_settings};
use url_opener::{extract, Pattern, PatternOverrides, PatternStore};

#[derive(Parser)]
#[command(name = "url-opener")]
#[command(about = "Open URLs from short identifiers like PROJ-123", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/url-opener/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pattern store file
    #[arg(long, global = true, env = "URL_OPENER_STORE")]
    store: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the pattern a URL would produce, without saving it
    Extract {
        url: String,
    },

    /// Add a pattern inferred from an example URL
    Add {
        url: String,

        /// Use this key instead of the inferred one
        #[arg(short, long)]
        key: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing pattern without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Add a pattern from a key and base URL
    AddManual {
        key: String,
        base_url: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List registered patterns
    List,

    /// Select the pattern bare numbers are opened against
    Select {
        key: String,
    },

    /// Change a pattern's display name
    Rename {
        key: String,
        name: String,
    },

    /// Delete a pattern
    Remove {
        key: String,
    },

    /// Print the URL for an identifier (prompts when none is given)
    Open {
        input: Option<String>,
    },

    /// Write settings to a file (or stdout)
    Export {
        file: Option<PathBuf>,
    },

    /// Replace all patterns with those in a settings file
    Import {
        file: PathBuf,
    },

    /// Menu-driven mode
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = load_config(cli.config.as_deref());
    let store_path = cli.store.clone().unwrap_or_else(|| config.store_path());

    if let Err(e) = run(cli.command, &store_path, &config) {
        print_error("Command failed!", &e);
        std::process::exit(1);
    }
}

fn open_store(store_path: &Path, config: &Config) -> Result<PatternStore> {
    load_store(store_path, config.auto_select_single)
}

fn run(command: Option<Commands>, store_path: &Path, config: &Config) -> Result<()> {
    let Some(command) = command else {
        return run_interactive_mode(store_path, config);
    };

    match command {
        Commands::Extract { url } => {
            let extraction = extract(&url)?;
            print_extraction(&extraction);
        }

        Commands::Add { url, key, name, yes } => {
            let mut store = open_store(store_path, config)?;
            let extraction = extract(&url)?;
            print_extraction(&extraction);
            println!();

            let overrides = PatternOverrides {
                key,
                base_url: None,
                display_name: name,
            };
            let pattern = pattern_from_extraction(&extraction, overrides)?;
            add_and_save(&mut store, pattern, yes, store_path)?;
        }

        Commands::AddManual { key, base_url, name, yes } => {
            let mut store = open_store(store_path, config)?;
            let pattern = Pattern::new(&key, &base_url, name.as_deref().unwrap_or(""))?;
            add_and_save(&mut store, pattern, yes, store_path)?;
        }

        Commands::List => {
            let store = open_store(store_path, config)?;
            print_patterns(&store);
        }

        Commands::Select { key } => {
            let mut store = open_store(store_path, config)?;
            let label = store.select(&key)?.label();
            save_store(&store, store_path)?;
            println!("{}", format!("Selected {}", label).green());
        }

        Commands::Rename { key, name } => {
            let mut store = open_store(store_path, config)?;
            store.rename(&key, &name)?;
            save_store(&store, store_path)?;
            println!("{}", format!("Renamed {} to {}", key.to_uppercase(), name.trim()).green());
        }

        Commands::Remove { key } => {
            let mut store = open_store(store_path, config)?;
            let removed = store.remove(&key)?;
            save_store(&store, store_path)?;
            println!("{}", format!("Deleted pattern {}", removed.label()).green());
        }

        Commands::Open { input } => {
            let mut store = open_store(store_path, config)?;
            match input {
                Some(input) => {
                    let url = store.open(&input)?;
                    println!("{}", url);
                    save_store(&store, store_path)?;
                }
                // Shortcut entry point: go straight to the identifier prompt.
                None => {
                    if prompt_and_open(&mut store)?.is_some() {
                        save_store(&store, store_path)?;
                    }
                }
            }
        }

        Commands::Export { file } => {
            let store = open_store(store_path, config)?;
            let content = export_settings(&store)?;
            match file {
                Some(file) => {
                    fs::write(&file, content)
                        .with_context(|| format!("Failed to write {}", file.display()))?;
                    println!("{}", format!("✅ Exported {} patterns to {}", store.len(), file.display()).green());
                }
                None => println!("{}", content),
            }
        }

        Commands::Import { file } => {
            let mut store = open_store(store_path, config)?;
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let count = import_settings(&mut store, &content)?;
            save_store(&store, store_path)?;
            println!("{}", format!("✅ Imported {} patterns", count).green());
        }

        Commands::Interactive => run_interactive_mode(store_path, config)?,
    }

    Ok(())
}

fn add_and_save(store: &mut PatternStore, pattern: Pattern, yes: bool, store_path: &Path) -> Result<()> {
    let key = pattern.key.clone();
    match add_with_confirmation(store, pattern, yes)? {
        Some(outcome) => {
            save_store(store, store_path)?;
            if let Some(stored) = store.get(&key) {
                print_added(stored, outcome);
            }
        }
        None => println!("{}", "Nothing changed.".yellow()),
    }
    Ok(())
}
