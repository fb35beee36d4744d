//! Breadth-first work queue with at-most-once enqueueing

use std::collections::{HashSet, VecDeque};

/// One pending unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    /// Canonical URL to process
    pub url: String,

    /// Hops from the root URL
    pub depth: u32,
}

impl CrawlTask {
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// FIFO queue of crawl tasks plus the set of every URL ever enqueued
///
/// Tasks come out in insertion order. Since a task at depth `d` only ever
/// enqueues tasks at `d + 1`, depths leave the queue in non-decreasing order.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<CrawlTask>,
    seen: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `url` at `depth` unless it was enqueued before
    ///
    /// The seen check and insertion happen together; a URL goes into the queue
    /// at most once over the lifetime of the frontier.
    ///
    /// # Returns
    ///
    /// * `true` - The task was enqueued
    /// * `false` - The URL had already been seen
    pub fn push_if_unseen(&mut self, url: &str, depth: u32) -> bool {
        if !self.seen.insert(url.to_string()) {
            return false;
        }
        self.queue.push_back(CrawlTask::new(url, depth));
        true
    }

    /// Removes the oldest task
    pub fn pop(&mut self) -> Option<CrawlTask> {
        self.queue.pop_front()
    }

    /// Returns true if the URL has ever been enqueued
    pub fn is_seen(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    /// Number of tasks still waiting
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of distinct URLs ever enqueued
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
