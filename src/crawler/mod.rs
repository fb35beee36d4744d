//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and content-type checks
//! - HTML parsing and link extraction
//! - URL filter chains
//! - The breadth-first frontier
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod filter;
mod frontier;
mod parser;

pub use coordinator::{Crawler, StopReason};
pub use fetcher::{build_http_client, fetch_url, media_type, FetchResult, HttpFetcher, PageFetcher};
pub use filter::{CrawlScope, FilterChain, FilterContext, UrlFilter};
pub use frontier::{CrawlTask, Frontier};
pub use parser::{extract_hrefs, extract_links, resolve_links};

use crate::config::{Config, Overrides};
use crate::state::CrawlState;
use crate::CrawlError;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the user agent and timeout settings
/// 2. Seed the frontier with the root URL
/// 3. Fetch pages breadth-first until the frontier drains or the depth limit is passed
///
/// # Arguments
///
/// * `config` - Client configuration (user agent, timeouts)
/// * `root` - The URL to start from
/// * `overrides` - Command-line values layered over the config file
///
/// # Returns
///
/// * `Ok((StopReason, CrawlState))` - Why the crawl ended and what it recorded
/// * `Err(CrawlError)` - The HTTP client could not be built
///
/// # Example
///
/// ```no_run
/// use webcrawler::config::{Config, Overrides};
/// use webcrawler::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (_reason, state) = crawl(&Config::default(), "https://example.com/", &Overrides::default()).await?;
/// println!("{} links followed", state.links_followed());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(
    config: &Config,
    root: &str,
    overrides: &Overrides,
) -> Result<(StopReason, CrawlState), CrawlError> {
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.http)?;
    let mut crawler = Crawler::new(config.crawl_options(root, overrides), fetcher);
    let reason = crawler.crawl().await;
    Ok((reason, crawler.into_state()))
}
