// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Starchart CLI - export a GitHub repository's star history as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Export the first 100 star events (token from $GITHUB_TOKEN)
//! starchart rust-lang rust stars.json
//!
//! # Follow pagination up to 5000 events
//! starchart rust-lang rust stars.json --max-stars 5000
//!
//! # GitHub Enterprise
//! starchart acme tool stars.json --endpoint https://ghe.acme.com/api/graphql
//!
//! # Mirror log output to a file
//! starchart rust-lang rust stars.json --log-file starchart.log
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use starchart_fetch::{FetchOptions, GITHUB_GRAPHQL_ENDPOINT, HttpTransport, StarFetcher};
use starchart_store::save_record;

// ============================================================================
// CLI Definition
// ============================================================================

/// Starchart - GitHub star history exporter.
#[derive(Debug, Parser)]
#[command(name = "starchart")]
#[command(about = "Export a GitHub repository's star history as JSON")]
#[command(version)]
pub struct Cli {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Output file path.
    pub output: PathBuf,

    /// GitHub access token with read access to the repository.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Maximum number of star events to fetch across all pages.
    #[arg(long, default_value_t = 100)]
    pub max_stars: usize,

    /// Stargazer edges per page (GitHub caps this at 100).
    #[arg(long, default_value_t = 100)]
    pub page_size: u32,

    /// GraphQL endpoint, e.g. for GitHub Enterprise.
    #[arg(long, default_value = GITHUB_GRAPHQL_ENDPOINT)]
    pub endpoint: String,

    /// Also append log output to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short)]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(cli: &Cli) -> Result<()> {
    if cli.quiet {
        return Ok(()); // No logging in quiet mode
    }

    let filter = if cli.verbose {
        EnvFilter::new("starchart=debug,info")
    } else {
        EnvFilter::new("starchart=info,warn")
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    let file_layer = match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(std::sync::Arc::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .with(filter)
        .init();
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli).await {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}

/// Fetches the star history and writes the output file.
async fn run(cli: &Cli) -> Result<()> {
    info!(owner = %cli.owner, name = %cli.name, "Fetching star data");

    let transport = HttpTransport::with_endpoint(&cli.token, &cli.endpoint)?;
    let options = FetchOptions::with_max_events(cli.max_stars).with_page_size(cli.page_size);
    let fetcher = StarFetcher::new(transport).with_options(options);

    let record = fetcher
        .fetch(&cli.owner, &cli.name)
        .await
        .with_context(|| format!("Failed to fetch star data for {}/{}", cli.owner, cli.name))?;

    save_record(&record, &cli.output)
        .await
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    info!(path = %cli.output.display(), events = record.star_history.len(), "Star data saved");

    if !cli.quiet {
        println!("{}", success_message(cli, &record.repo_name));
        if record.is_truncated() {
            eprintln!(
                "Note: fetched {} of {} star events; raise --max-stars for the full history",
                record.star_history.len(),
                record.star_count
            );
        }
    }

    Ok(())
}

/// Builds the styled success line printed on stdout.
fn success_message(cli: &Cli, repo_name: &str) -> String {
    let message = format!(
        "Star data for {} saved to {}",
        repo_name,
        cli.output.display()
    );
    if cli.no_color {
        message
    } else {
        format!("\x1b[1;32m{message}\x1b[0m")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_required_arguments() {
        let cli = parse(&[
            "starchart", "octo", "demo", "stars.json", "--token", "abc123",
        ]);
        assert_eq!(cli.owner, "octo");
        assert_eq!(cli.name, "demo");
        assert_eq!(cli.output, PathBuf::from("stars.json"));
        assert_eq!(cli.token, "abc123");
    }

    #[test]
    fn test_defaults_match_single_page() {
        let cli = parse(&[
            "starchart", "octo", "demo", "stars.json", "--token", "t",
        ]);
        assert_eq!(cli.max_stars, 100);
        assert_eq!(cli.page_size, 100);
        assert_eq!(cli.endpoint, GITHUB_GRAPHQL_ENDPOINT);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_missing_output_path_rejected() {
        let result = Cli::try_parse_from(["starchart", "octo", "demo", "--token", "t"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_success_message_styling() {
        let mut cli = parse(&[
            "starchart", "octo", "demo", "stars.json", "--token", "t",
        ]);
        assert!(success_message(&cli, "octo/demo").contains("\x1b[1;32m"));

        cli.no_color = true;
        assert_eq!(
            success_message(&cli, "octo/demo"),
            "Star data for octo/demo saved to stars.json"
        );
    }
}
