//! Contact Scraper main entry point
//!
//! This is the command-line interface for the contact scraper.

use anyhow::{bail, Context};
use clap::Parser;
use contact_scraper::config::{load_config_with_hash, validate, Config};
use contact_scraper::crawler::crawl;
use contact_scraper::output::{print_contacts, print_statistics};
use contact_scraper::url::{normalize_seed, parse_seed_list};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Contact Scraper: harvests phone numbers from a list of websites
///
/// Each site is crawled one hop deep. Pages that look like contact or about
/// pages are checked first, and the whole run stops at a fixed time budget.
/// Results are listed on the console and written to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "contact-scraper")]
#[command(version)]
#[command(about = "Harvests phone contacts from a list of websites", long_about = None)]
struct Cli {
    /// Website URLs to crawl (scheme optional, http:// is assumed)
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Read URLs from a file, one per line (blank lines ignored)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// CSV output path (overrides the configuration)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Time budget in seconds (overrides the configuration)
    #[arg(long, value_name = "SECS")]
    budget: Option<u64>,

    /// Do not write a CSV file
    #[arg(long)]
    no_csv: bool,

    /// Show the configuration and seeds that would be crawled, then exit
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_configuration(&cli)?;
    let seeds = read_seeds(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config, &seeds);
        return Ok(());
    }

    handle_crawl(&config, &seeds, !cli.no_csv).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("contact_scraper=info,warn"),
            1 => EnvFilter::new("contact_scraper=debug,info"),
            2 => EnvFilter::new("contact_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn load_configuration(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(budget) = cli.budget {
        config.crawler.time_budget_secs = budget;
    }
    if let Some(output) = &cli.output {
        config.output.csv_path = output.display().to_string();
    }

    validate(&config).context("Invalid command-line override")?;
    Ok(config)
}

/// Collects seeds from the input file and positional arguments, or stdin
fn read_seeds(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let mut seeds = Vec::new();

    if let Some(path) = &cli.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read URL list {}", path.display()))?;
        seeds.extend(parse_seed_list(&text));
    }

    seeds.extend(
        cli.urls
            .iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty()),
    );

    if seeds.is_empty() && cli.input.is_none() {
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            eprintln!("Enter one URL per line (Ctrl-D to finish):");
        }
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read URLs from stdin")?;
        seeds.extend(parse_seed_list(&text));
    }

    if seeds.is_empty() {
        bail!("No URLs to scrape");
    }

    Ok(seeds)
}

/// Handles the --dry-run mode: shows configuration and normalized seeds
fn handle_dry_run(config: &Config, seeds: &[String]) {
    println!("=== Contact Scraper Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Time budget: {}s", config.crawler.time_budget_secs);
    println!("  Contact keywords: {}", config.crawler.keywords.join(", "));

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);
    println!(
        "  Connection retries: {} (backoff base {}ms)",
        config.http.connect_retries, config.http.backoff_base_ms
    );
    println!(
        "  Certificate validation: {}",
        if config.http.accept_invalid_certs {
            "disabled"
        } else {
            "enabled"
        }
    );

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\nSeeds ({}):", seeds.len());
    let mut valid = 0;
    for seed in seeds {
        match normalize_seed(seed) {
            Ok(normalized) => {
                valid += 1;
                println!("  - {}", normalized);
            }
            Err(e) => println!("  ✗ {} ({})", seed, e),
        }
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling with {} seed URLs", valid);
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, seeds: &[String], write_csv: bool) -> anyhow::Result<()> {
    tracing::info!("Scraping contacts from {} URLs", seeds.len());

    let outcome = crawl(config, seeds)
        .await
        .context("Failed to start crawl")?;

    println!("Scraping completed!\n");
    print_contacts(&outcome.records);

    if write_csv && !outcome.records.is_empty() {
        let path = Path::new(&config.output.csv_path);
        outcome
            .export_csv(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nCSV written to {}", path.display());
    }

    println!();
    print_statistics(&outcome.stats);

    Ok(())
}
