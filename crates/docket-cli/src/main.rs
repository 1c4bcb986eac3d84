//! Docket CLI - Command Line Interface
//!
//! Sample entry point for the Docket document store. Runs the demo flow or
//! loads a JSON fixture into a fresh store and searches it.
//!
//! @version 0.1.0
//! @author Docket Development Team

use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use docket_common::utils::{parse_optional_timestamp, parse_timestamp};
use docket_common::{DocketConfig, LoggingConfig, Result};
use docket_document::{Author, Document, DocumentStore, SearchCriteria};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI Arguments
// =============================================================================

#[derive(Parser)]
#[command(name = "docket")]
#[command(author = "Docket Development Team")]
#[command(version = "0.1.0")]
#[command(about = "Docket in-memory document store", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save two sample documents, search them and look one up by ID
    Demo,
    /// Load documents from a JSON array and search them
    Search(SearchArgs),
}

#[derive(clap::Args)]
struct SearchArgs {
    /// JSON file holding an array of documents
    #[arg(short, long)]
    file: PathBuf,

    /// Title prefix (repeatable, any may match)
    #[arg(long = "title-prefix")]
    title_prefixes: Vec<String>,

    /// Content substring (repeatable, any may match)
    #[arg(long = "contains")]
    contains_contents: Vec<String>,

    /// Author ID (repeatable, any may match)
    #[arg(long = "author-id")]
    author_ids: Vec<String>,

    /// Inclusive lower bound on creation time (RFC 3339)
    #[arg(long)]
    from: Option<String>,

    /// Inclusive upper bound on creation time (RFC 3339)
    #[arg(long)]
    to: Option<String>,

    /// Look up a single document by ID instead of searching
    #[arg(long)]
    id: Option<String>,
}

impl SearchArgs {
    fn criteria(&self) -> Result<SearchCriteria> {
        let mut builder = SearchCriteria::builder()
            .title_prefixes(self.title_prefixes.iter().cloned())
            .contains_contents(self.contains_contents.iter().cloned())
            .author_ids(self.author_ids.iter().cloned());

        if let Some(from) = parse_optional_timestamp(self.from.as_deref())? {
            builder = builder.created_from(from);
        }
        if let Some(to) = parse_optional_timestamp(self.to.as_deref())? {
            builder = builder.created_to(to);
        }

        Ok(builder.build())
    }
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_ref() {
        Some(path) => match DocketConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                init_tracing(&LoggingConfig::default());
                tracing::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => DocketConfig::default(),
    };

    init_tracing(&config.logging);

    let result = match cli.command {
        Commands::Demo => run_demo(&config),
        Commands::Search(args) => run_search(&config, &args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(logging.ansi)
        .init();
}

// =============================================================================
// Commands
// =============================================================================

fn run_demo(config: &DocketConfig) -> Result<()> {
    let mut store = DocumentStore::with_config(&config.store);
    tracing::info!("Running demo against store '{}'", store.name());

    let doc1 = store.save(Document::new(
        "Document 1",
        "Content of document 1.",
        Author::new("Roman"),
        Utc::now(),
    ));
    store.save(Document::new(
        "Document 2",
        "Content of document 2.",
        Author::new("Taras"),
        Utc::now(),
    ));

    let criteria = SearchCriteria::builder()
        .title_prefix("Document")
        .created_from(parse_timestamp("2024-07-16T00:00:00Z")?)
        .created_to(Utc::now() + Duration::days(1))
        .build();

    println!("Search result:");
    for doc in store.search(&criteria) {
        println!("{}", doc.title);
    }

    if let Some(found) = store.find_by_id(doc1.id.as_str()) {
        println!("Found document by id: {}", found.title);
    }

    Ok(())
}

fn run_search(config: &DocketConfig, args: &SearchArgs) -> Result<()> {
    let criteria = args.criteria()?;

    let json = std::fs::read_to_string(&args.file)?;
    let documents = Document::list_from_json(&json)?;

    let mut store = DocumentStore::with_config(&config.store);
    store.extend(documents);
    tracing::info!(
        "Loaded {} documents from {}",
        store.len(),
        args.file.display()
    );

    let output = match args.id.as_deref() {
        Some(id) => {
            let found = store.find_by_id(id);
            if found.is_none() {
                tracing::warn!("No document with id {}", id);
            }
            serde_json::to_string_pretty(&found)?
        }
        None => {
            let results = store.search(&criteria);
            tracing::info!("{} of {} documents matched", results.len(), store.len());
            serde_json::to_string_pretty(&results)?
        }
    };

    println!("{}", output);
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
