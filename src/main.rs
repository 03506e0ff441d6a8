//! Makai Suggest - Main entrypoint.
//!
//! This is the main entry point for the Makai Suggest application. It
//! initializes the logging system, loads configuration, and serves fuzzy
//! autocomplete queries over a bundled dataset, either interactively or as
//! a one-shot lookup.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;
use tracing::info;

use makai_suggest_lib::config::{self, ConfigLoader, MakaiConfig};
use makai_suggest_lib::dataset::DatasetLoader;
use makai_suggest_lib::error::{set_error_reporter, MakaiError, MakaiResult, TracingErrorReporter};
use makai_suggest_lib::suggest::SuggestService;

/// Command line arguments for Makai Suggest.
#[derive(Parser, Debug)]
#[clap(name = "Makai Suggest", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load the dataset in the background and answer queries interactively
    Start,

    /// Answer a single query and exit
    Query {
        /// Query text
        text: String,

        /// Print results as JSON instead of plain lines
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging() -> MakaiResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MakaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
#[tokio::main]
async fn main() -> MakaiResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    // Load configuration
    let env_prefix = "MAKAI";
    let config_loader = ConfigLoader::new(args.config.as_deref(), env_prefix);

    match args.command.unwrap_or(Command::Start) {
        Command::Start => {
            let config = load_or_exit(&config_loader);
            config::init_global_config(config.clone());
            run_interactive(config).await
        }
        Command::Query { text, json } => {
            let config = load_or_exit(&config_loader);
            run_oneshot(config, &text, json).await
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = MakaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(MakaiError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| MakaiError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(MakaiError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

fn load_or_exit(loader: &ConfigLoader) -> MakaiConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

/// Load the dataset in the background while serving stdin queries, one per
/// line. Queries issued before the load completes render as "No suggestions
/// found", just like queries with no matches.
async fn run_interactive(config: MakaiConfig) -> MakaiResult<()> {
    info!("Starting Makai Suggest");

    let service = Arc::new(SuggestService::new(config.engine.clone()));
    let loader = DatasetLoader::from_config(&config.dataset);

    let background = Arc::clone(&service);
    tokio::spawn(async move {
        match loader.load().await {
            Ok(records) => {
                background.load_records(records);
            }
            Err(e) => {
                tracing::error!("Dataset load failed: {}", e);
            }
        }
    });

    println!("Type a prefix and press enter (ctrl-d to quit):");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(MakaiError::Io)? {
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        render(&service.suggest(query));
    }

    Ok(())
}

/// Load the dataset to completion, answer one query, and exit.
async fn run_oneshot(config: MakaiConfig, text: &str, json: bool) -> MakaiResult<()> {
    let service = SuggestService::new(config.engine.clone());
    let loader = DatasetLoader::from_config(&config.dataset);

    let records = loader.load().await?;
    service.load_records(records);

    let results = service.suggest(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        render(&results);
    }

    Ok(())
}

fn render(results: &[makai_suggest_lib::data_structures::Suggestion]) {
    if results.is_empty() {
        println!("No suggestions found");
        return;
    }
    for suggestion in results {
        println!("{}  ({})", suggestion.word, suggestion.score);
    }
}
