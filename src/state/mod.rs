//! Crawl state tracking
//!
//! This module defines the bookkeeping a crawl accumulates: the visited set,
//! the remembered URLs and links used for reporting, and the counters.

mod crawl_state;
mod link;

pub use crawl_state::CrawlState;
pub use link::{Link, HREF};
