//! webcrawler main entry point
//!
//! This is the command-line interface for the breadth-first web crawler.

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use webcrawler::config::{load_config, Config, Overrides};
use webcrawler::crawler::{Crawler, HttpFetcher};
use webcrawler::output::{log_statistics, render_report, CrawlStatistics, OutputMode};

/// webcrawler: a breadth-first web crawler
///
/// Starts from URL, follows links breadth-first up to the depth limit, and
/// reports the URLs or links it found on the same host.
#[derive(Parser, Debug)]
#[command(name = "webcrawler")]
#[command(version)]
#[command(about = "A breadth-first web crawler", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum depth to traverse [default: 3]
    #[arg(short, long, value_name = "N")]
    depth: Option<u32>,

    /// Confine crawl to the specified prefix
    #[arg(short, long, value_name = "PREFIX")]
    confine: Option<String>,

    /// Do not restrict the crawl to the first host
    #[arg(short = 'n', long)]
    no_host_lock: bool,

    /// Exclude URLs by prefix (repeatable)
    #[arg(short = 'x', long, value_name = "PREFIX")]
    exclude: Vec<String>,

    /// Output links found
    #[arg(short = 'l', long, conflicts_with = "show_urls")]
    show_links: bool,

    /// Output URLs found
    #[arg(short = 'u', long, conflicts_with = "show_links")]
    show_urls: bool,

    /// Report every discovered link, not only those on the crawl host and prefix
    #[arg(short = 'a', long)]
    all_links: bool,

    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            depth: self.depth,
            confine: self.confine.clone(),
            exclude: self.exclude.clone(),
            no_host_lock: self.no_host_lock,
            all_links: self.all_links,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?
        }
        None => Config::default(),
    };

    let options = config.crawl_options(&cli.url, &cli.overrides());
    let mode = OutputMode::from_flags(cli.show_urls, cli.show_links);

    tracing::info!(
        "Recursive crawling started with maximum traversing depth set to {}",
        options.depth_limit
    );

    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.http)
        .context("failed to build HTTP client")?;
    let mut crawler = Crawler::new(options, fetcher);

    let start_time = Instant::now();
    let reason = crawler.crawl().await;
    let elapsed = start_time.elapsed();

    if let Some(report) = render_report(crawler.state(), mode) {
        println!("{}", report);
    }

    log_statistics(&CrawlStatistics::new(crawler.state(), reason, elapsed));

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("webcrawler=info,warn"),
            1 => EnvFilter::new("webcrawler=debug,info"),
            2 => EnvFilter::new("webcrawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}
