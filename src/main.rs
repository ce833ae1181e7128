//! Site-Harvest main entry point
//!
//! This is the command-line interface for the Site-Harvest page harvester.

use anyhow::Context;
use clap::Parser;
use site_harvest::config::{load_config_with_hash, Config};
use site_harvest::pipeline::run_harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Harvest: a single-page website harvester
///
/// Fetches one page, collects its links, images, phone numbers, zip codes
/// and vocabulary, downloads the images, and writes a timestamped report.
#[derive(Parser, Debug)]
#[command(name = "site-harvest")]
#[command(version)]
#[command(about = "A single-page website harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_harvest(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_harvest=info,warn"),
            1 => EnvFilter::new("site_harvest=debug,info"),
            2 => EnvFilter::new("site_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Site-Harvest Dry Run ===\n");

    println!("Target:");
    println!("  URL: {}", config.target.url);
    println!(
        "  Domain filter: {}",
        config
            .target
            .effective_domain_filter()
            .unwrap_or_else(|| "(none)".to_string())
    );

    println!("\nFetch:");
    println!("  User agent: {}", config.fetch.user_agent());
    match config.fetch.timeout_secs {
        Some(secs) => println!("  Timeout: {}s", secs),
        None => println!("  Timeout: client default"),
    }

    println!("\nExtraction:");
    println!("  Phone pattern: {}", config.extraction.phone_pattern);
    println!("  Zip pattern: {}", config.extraction.zip_pattern);

    println!("\nLanguage:");
    println!("  Stop words: {}", config.language.language);
    if let Some(dir) = &config.language.data_dir {
        println!("  Data dir: {}", dir);
    }
    if let Some(url) = &config.language.stopwords_url {
        println!("  Stop-word source: {}", url);
    }
    if let Some(path) = &config.language.lexicon_path {
        println!("  Extra lexicon: {}", path);
    }

    println!("\nOutput:");
    println!("  Images: {}", config.output.image_dir);
    println!("  Reports: {}", config.output.report_dir);

    println!("\n✓ Configuration is valid");
}

/// Handles the main harvest operation
async fn handle_harvest(config: Config) -> anyhow::Result<()> {
    let target = config.target.url.clone();

    match run_harvest(config).await {
        Ok(outcome) => {
            let downloads = &outcome.report.downloads;
            if downloads.failed_count() > 0 {
                tracing::warn!(
                    "{} of {} images failed to download",
                    downloads.failed_count(),
                    downloads.attempted()
                );
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e).with_context(|| format!("harvest of {} failed", target))
        }
    }
}
