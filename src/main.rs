//! Olelo - command-line entrypoint.
//!
//! Runs one dictionary operation per invocation: it loads configuration,
//! initializes logging, opens the dictionary, executes the subcommand and
//! writes the binary snapshot back when the dictionary changed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use olelo_lib::config::{self, LogConfig, OleloConfig, Validate};
use olelo_lib::data_structures::WordRecord;
use olelo_lib::dictionary::Dictionary;

/// Command line arguments for Olelo.
#[derive(Parser, Debug)]
#[command(name = "olelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Look a word up (counts as a selection when `count_searches` is on)
    Search { word: String },

    /// Insert one occurrence of each word
    Insert {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Delete a word
    Delete { word: String },

    /// Show the most frequent words
    Top {
        #[arg(short)]
        k: Option<usize>,
    },

    /// Show the most frequent completions of a prefix
    Complete {
        prefix: String,
        #[arg(short)]
        k: Option<usize>,
    },

    /// Accept a suggestion, inserting it if it is not stored
    Select { text: String },

    /// Show the closest stored words by edit distance
    Suggest {
        word: String,
        #[arg(short)]
        k: Option<usize>,
    },

    /// Import a text dictionary (one word per line) into the current contents
    Import { path: PathBuf },

    /// Export all words, sorted, to a text file (defaults to the configured path)
    Export { path: Option<PathBuf> },

    /// Write the binary snapshot
    Save,

    /// Validate the configuration
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.context("Failed to set global tracing subscriber")
}

/// Prints `value` as JSON when requested, otherwise runs `plain`.
fn emit<T: Serialize>(json: bool, value: &T, plain: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        plain();
    }
    Ok(())
}

fn print_ranked(records: &[WordRecord], empty: &str) {
    if records.is_empty() {
        println!("{empty}");
    }
    for (i, record) in records.iter().enumerate() {
        println!("{}. {} ({})", i + 1, record.word, record.frequency);
    }
}

fn gen_config(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml = toml::to_string_pretty(&OleloConfig::default())
        .context("Failed to serialize default configuration")?;
    std::fs::write(output, toml)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

/// Main entry point for the application.
fn main() -> Result<()> {
    let args = Args::parse();

    if let Command::GenConfig { output } = &args.command {
        gen_config(output)?;
        println!("Default configuration written to {}", output.display());
        return Ok(());
    }

    let config = config::load_config(args.config.as_deref()).context("Configuration error")?;
    init_logging(&config.log)?;
    olelo_lib::init();

    if let Command::Validate = args.command {
        config.validate()?;
        info!("Configuration validated successfully");
        println!("Configuration is valid");
        return Ok(());
    }

    let limit = config.dictionary.suggestion_limit;
    let mut dictionary =
        Dictionary::open(config.dictionary).context("Failed to open dictionary")?;
    let json = args.json;

    let mutated = match args.command {
        Command::Search { word } => {
            let frequency = dictionary.search(&word);
            emit(json, &frequency, || match frequency {
                Some(f) => println!("\"{word}\" found. Frequency now {f}"),
                None => println!("\"{word}\" not found"),
            })?;
            frequency.is_some() && dictionary.config().count_searches
        }
        Command::Insert { words } => {
            let inserted: Vec<_> = words
                .iter()
                .map(|word| (dictionary.trie().normalize(word), dictionary.insert(word)))
                .collect();
            emit(json, &inserted, || {
                for (word, frequency) in &inserted {
                    println!("Inserted \"{word}\" (frequency {frequency})");
                }
            })?;
            true
        }
        Command::Delete { word } => {
            let deleted = dictionary.delete(&word);
            emit(json, &deleted, || {
                if deleted {
                    println!("\"{word}\" deleted");
                } else {
                    println!("\"{word}\" not found");
                }
            })?;
            deleted
        }
        Command::Top { k } => {
            let records = dictionary.top_k(k.unwrap_or(limit));
            emit(json, &records, || print_ranked(&records, "No words in dictionary"))?;
            false
        }
        Command::Complete { prefix, k } => {
            let records = dictionary.autocomplete(&prefix, k.unwrap_or(limit));
            emit(json, &records, || {
                print_ranked(&records, &format!("No suggestions for \"{prefix}\""))
            })?;
            false
        }
        Command::Select { text } => {
            let selection = dictionary.select_suggestion(&text);
            emit(json, &selection, || {
                if selection.inserted {
                    println!("Inserted chosen word \"{text}\"");
                } else {
                    println!("Chosen \"{text}\" (new frequency {})", selection.frequency);
                }
            })?;
            true
        }
        Command::Suggest { word, k } => {
            let suggestions = dictionary.spell_suggest(&word, k.unwrap_or(limit));
            emit(json, &suggestions, || match &suggestions {
                None => println!("No words to compare"),
                Some(list) => {
                    println!("Spell suggestions for \"{word}\":");
                    for (i, s) in list.iter().enumerate() {
                        println!("{}. {} (dist={}, freq={})", i + 1, s.word, s.distance, s.frequency);
                    }
                }
            })?;
            false
        }
        Command::Import { path } => {
            let import = dictionary.load_text_from(&path)?;
            emit(json, &import, || {
                println!(
                    "Imported {} words from {} ({} lines skipped)",
                    import.inserted,
                    path.display(),
                    import.skipped
                )
            })?;
            import.inserted > 0
        }
        Command::Export { path } => {
            let target = path.unwrap_or_else(|| dictionary.config().text_path.clone());
            let written = dictionary.save_text_to(&target)?;
            emit(json, &written, || {
                println!("Exported {written} words to {}", target.display())
            })?;
            false
        }
        Command::Save => true,
        Command::Validate | Command::GenConfig { .. } => false,
    };

    if mutated {
        dictionary.close().context("Failed to save binary snapshot")?;
    }
    Ok(())
}
