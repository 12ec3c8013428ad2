use std::fs;
use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_classifier::config::EngineConfig;
use transaction_classifier::engine::IngestEngine;
use transaction_classifier::query::{PageRequest, QueryService};
use transaction_classifier::storage::MemoryStore;
use transaction_classifier::types::ResultSetName;

#[derive(Parser)]
#[command(name = "transaction-classifier", about = "Validate a transactions CSV and browse the chart of accounts, collections accounts and bad transactions.")]
struct Cli {
    /// The CSV file to upload.
    input: PathBuf,
    /// JSON file with engine settings; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print one page of this set instead of the upload overview.
    #[arg(long)]
    set: Option<ResultSetName>,
    #[arg(long)]
    page: Option<String>,
    #[arg(long = "items-per-page")]
    items_per_page: Option<String>,
    #[arg(long)]
    search: Option<String>,
    /// error, warn, info, debug or trace.
    #[arg(long = "log-level", default_value = "error")]
    log_level: String
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let config = EngineConfig::load(cli.config.as_deref())?;
    let store = Arc::new(MemoryStore::new());
    let queries = QueryService::new(store.clone(), &config);
    let engine = IngestEngine::new(store, config);

    let bytes = fs::read(&cli.input)
        .with_context(|| format!("Failed to open file: {}", cli.input.display()))?;
    let file_name = cli.input.file_name().and_then(|name| name.to_str());

    let summary = engine.upload(file_name, bytes).await?;

    let request = PageRequest::from_params(cli.page.as_deref(), cli.items_per_page.as_deref(), cli.search.as_deref());

    let output = match cli.set {
        Some(set) => serde_json::to_value(queries.query(set, &request))?,
        None => {
            let mut overview = json!({ "summary": summary });

            for set in ResultSetName::ALL {
                overview[set.as_str()] = serde_json::to_value(queries.query(set, &request))?;
            }

            overview
        }
    };

    write_json_to_stdout(&output)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the JSON result, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_json_to_stdout(value: &serde_json::Value) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, value)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
