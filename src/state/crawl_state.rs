use crate::state::Link;
use std::collections::{BTreeSet, HashSet};

/// Everything a crawl records about the pages it processed
///
/// All sets only ever grow. The remembered sets are ordered so that reports
/// come out in a stable order.
#[derive(Debug, Default)]
pub struct CrawlState {
    /// Canonical URLs accepted for processing
    visited: HashSet<String>,

    /// Discovered URLs that passed the out-link chain
    remembered_urls: BTreeSet<String>,

    /// Discovered links that passed the out-link chain
    remembered_links: BTreeSet<Link>,

    /// Discovered links that passed the out-link chain, counted per occurrence
    links_found: u64,

    /// URLs accepted by the pre-visit chain and handed to the fetcher
    links_followed: u64,
}

impl CrawlState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the URL has already been accepted for processing
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Records that a URL is being followed
    ///
    /// Marks it visited and bumps `links_followed`. Returns false, and changes
    /// nothing, if the URL was already visited.
    pub fn mark_followed(&mut self, url: &str) -> bool {
        if !self.visited.insert(url.to_string()) {
            return false;
        }
        self.links_followed += 1;
        true
    }

    /// Records a discovered link that passed the out-link chain
    pub fn remember(&mut self, source: &str, destination: &str) {
        self.links_found += 1;
        self.remembered_urls.insert(destination.to_string());
        self.remembered_links.insert(Link::href(source, destination));
    }

    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    pub fn remembered_urls(&self) -> &BTreeSet<String> {
        &self.remembered_urls
    }

    pub fn remembered_links(&self) -> &BTreeSet<Link> {
        &self.remembered_links
    }

    pub fn links_found(&self) -> u64 {
        self.links_found
    }

    pub fn links_followed(&self) -> u64 {
        self.links_followed
    }
}
