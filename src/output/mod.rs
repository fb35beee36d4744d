//! Output module for crawl reports and statistics
//!
//! This module handles:
//! - Rendering the remembered URLs or links as plain-text reports
//! - Computing and logging end-of-crawl statistics

mod report;
pub mod stats;

pub use report::{render_links, render_report, render_urls, OutputMode};
pub use stats::{log_statistics, CrawlStatistics};
