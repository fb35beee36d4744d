//! Configuration module
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file, and resolving it together with command-line overrides
//! into the `CrawlOptions` a crawl runs with.
//!
//! # Example
//!
//! ```no_run
//! use webcrawler::config::{load_config, Overrides};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! let options = config.crawl_options("https://example.com/", &Overrides::default());
//! println!("Crawler will use max depth: {}", options.depth_limit);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlOptions, CrawlerConfig, HttpConfig, Overrides, UserAgentConfig,
    DEFAULT_MAX_DEPTH,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
