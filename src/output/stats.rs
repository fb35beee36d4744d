//! End-of-crawl statistics
//!
//! This module turns the final crawl state into summary numbers and writes
//! them to the log.

use crate::crawler::StopReason;
use crate::state::CrawlState;
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlStatistics {
    /// Discovered links that passed the out-link chain (every occurrence)
    pub links_found: u64,

    /// URLs handed to the fetcher
    pub links_followed: u64,

    /// Distinct remembered URLs
    pub unique_urls: usize,

    /// Distinct remembered links
    pub unique_links: usize,

    /// Wall-clock duration of the crawl
    pub elapsed: Duration,

    /// Why the crawl ended
    pub stop_reason: StopReason,
}

impl CrawlStatistics {
    /// Collects statistics from a finished crawl
    pub fn new(state: &CrawlState, stop_reason: StopReason, elapsed: Duration) -> Self {
        Self {
            links_found: state.links_found(),
            links_followed: state.links_followed(),
            unique_urls: state.remembered_urls().len(),
            unique_links: state.remembered_links().len(),
            elapsed,
            stop_reason,
        }
    }

    /// Found links per second, rounded up
    ///
    /// A crawl too fast to measure reports `links_found` itself.
    pub fn links_per_second(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return self.links_found;
        }
        (self.links_found as f64 / secs).ceil() as u64
    }
}

/// Writes the statistics to the log at info level
pub fn log_statistics(stats: &CrawlStatistics) {
    match stats.stop_reason {
        StopReason::FrontierExhausted => {
            tracing::info!("Crawl stopped: frontier exhausted");
        }
        StopReason::DepthLimit { depth } => {
            tracing::info!("Crawl stopped: reached depth {} beyond the limit", depth);
        }
    }

    tracing::info!(
        "Crawling completed with {} links found and {} followed",
        stats.links_found,
        stats.links_followed
    );
    tracing::info!(
        "Remembered {} unique URLs and {} unique links",
        stats.unique_urls,
        stats.unique_links
    );
    tracing::info!(
        "Found {} links per second in {:.2} seconds",
        stats.links_per_second(),
        stats.elapsed.as_secs_f64()
    );
}
