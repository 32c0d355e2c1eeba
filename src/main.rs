//! Ompedia crawler main entry point
//!
//! This is the command-line interface for the Omnipedia site crawler.

use anyhow::Context;
use clap::Parser;
use ompedia_crawler::config::{load_config_with_hash, validate_seed_url, Config};
use ompedia_crawler::crawler::{build_http_client, crawl_with, CrawlOptions};
use ompedia_crawler::output::{compute_statistics, print_statistics, write_json};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ompedia crawler: a polite Omnipedia site walker
///
/// Crawls an Omnipedia site depth-first from a seed URL, one page at a time
/// with a fixed pause between fetches, and prints one JSON record per page.
#[derive(Parser, Debug)]
#[command(name = "ompedia-crawl")]
#[command(version)]
#[command(about = "A polite Omnipedia site walker", long_about = None)]
struct Cli {
    /// URL to start from (overrides `seed-url` from the config)
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Pretty-print the JSON output
    #[arg(long, conflicts_with = "stats")]
    pretty: bool,

    /// Print crawl statistics instead of JSON
    #[arg(long)]
    stats: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with_all = ["stats", "pretty"])]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = load(cli.config.as_ref())?;

    if let Some(seed) = cli.seed {
        validate_seed_url(&seed).context("Invalid seed URL")?;
        config.crawler.seed_url = seed;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config, cli.stats, cli.pretty).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the crawl output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ompedia_crawler=info,warn"),
            1 => EnvFilter::new("ompedia_crawler=debug,info"),
            2 => EnvFilter::new("ompedia_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if one was given, otherwise the built-in defaults
fn load(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Ompedia Crawler Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!("  Request delay: {}ms", config.crawler.request_delay_ms);
    println!("  On page error: {:?}", config.crawler.on_page_error);
    if !config.crawler.base_path.is_empty() {
        println!("  Base path: {}", config.crawler.base_path);
    }

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nHTTP:");
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling at {}", config.crawler.seed_url);
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, stats: bool, pretty: bool) -> anyhow::Result<()> {
    let client = build_http_client(config).context("Failed to build HTTP client")?;
    let options = CrawlOptions::from(&config.crawler);

    let result = match crawl_with(&client, &config.crawler.seed_url, options).await {
        Ok(result) => {
            tracing::info!("Crawl completed successfully");
            result
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    if stats {
        print_statistics(&compute_statistics(&result));
    } else {
        write_json(&result, std::io::stdout().lock(), pretty)
            .context("Failed to write crawl output")?;
    }

    Ok(())
}
