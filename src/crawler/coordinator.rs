//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop. It owns the frontier
//! and the crawl state, runs the filter chains, and drives a `PageFetcher`
//! one page at a time.

use crate::config::CrawlOptions;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::filter::{CrawlScope, FilterChain, FilterContext};
use crate::crawler::frontier::{CrawlTask, Frontier};
use crate::state::CrawlState;
use crate::url::canonicalize;
use crate::CrawlError;
use url::Url;

/// Why a crawl finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every enqueued task was processed or rejected
    FrontierExhausted,

    /// A task deeper than the limit reached the head of the queue
    ///
    /// The frontier hands out depths in non-decreasing order, so every task
    /// left behind is at least this deep.
    DepthLimit {
        /// Depth of the first task beyond the limit
        depth: u32,
    },
}

/// Breadth-first crawler
pub struct Crawler<F> {
    root: String,
    depth_limit: u32,
    scope: CrawlScope,
    pre_visit: FilterChain,
    out_link: FilterChain,
    frontier: Frontier,
    state: CrawlState,
    fetcher: F,
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `options` - Root URL, depth limit and filter settings
    /// * `fetcher` - Where outbound links come from
    pub fn new(options: CrawlOptions, fetcher: F) -> Self {
        let scope = CrawlScope::from_options(&options);

        Self {
            root: root_url(&options.root),
            depth_limit: options.depth_limit,
            scope,
            pre_visit: FilterChain::pre_visit(),
            out_link: FilterChain::out_link(options.filter_remembered),
            frontier: Frontier::new(),
            state: CrawlState::new(),
            fetcher,
        }
    }

    /// Runs the crawl to completion
    ///
    /// ```text
    /// q <- (root, 0)
    /// while q not empty:
    ///     (url, depth) <- q.pop()
    ///     if depth > limit: stop
    ///     if url passes the pre-visit chain:
    ///         mark visited, fetch, enqueue unseen links at depth + 1,
    ///         remember links passing the out-link chain
    /// ```
    ///
    /// Failures while processing one URL are logged and never end the crawl.
    /// The root is only seeded once, so calling this again on a finished
    /// crawler returns immediately.
    pub async fn crawl(&mut self) -> StopReason {
        self.frontier.push_if_unseen(&self.root, 0);

        while let Some(task) = self.frontier.pop() {
            tracing::debug!(
                "Got {} from queue to process with depth {}",
                task.url,
                task.depth
            );

            if task.depth > self.depth_limit {
                tracing::debug!(
                    "Will not process any further because depth {} > depth limit {}",
                    task.depth,
                    self.depth_limit
                );
                return StopReason::DepthLimit { depth: task.depth };
            }

            let ctx = FilterContext {
                scope: &self.scope,
                state: &self.state,
            };
            if let Some(filter) = self.pre_visit.first_rejection(&task.url, &ctx) {
                tracing::debug!("Will not process {}: rejected by {} filter", task.url, filter);
                continue;
            }

            tracing::info!("Processing [{}] {}", task.depth, task.url);
            if let Err(e) = self.process_url(&task).await {
                tracing::warn!("Can't process url '{}' ({})", task.url, e);
            }
        }

        StopReason::FrontierExhausted
    }

    /// Fetches one accepted URL and records what it links to
    async fn process_url(&mut self, task: &CrawlTask) -> Result<(), CrawlError> {
        self.state.mark_followed(&task.url);

        let links = self.fetcher.out_links(&task.url).await?;

        let next_depth = task.depth + 1;
        let mut added_links = 0;
        for link in links.iter().map(|l| canonicalize(l)) {
            if self.frontier.push_if_unseen(&link, next_depth) {
                added_links += 1;
            }

            let remember = self.out_link.accepts(
                &link,
                &FilterContext {
                    scope: &self.scope,
                    state: &self.state,
                },
            );
            if remember {
                self.state.remember(&task.url, &link);
            }
        }

        tracing::debug!("Added {} links for depth {}", added_links, next_depth);
        Ok(())
    }

    /// The canonical root URL
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Network location the crawl is locked to
    pub fn host(&self) -> &str {
        &self.scope.host
    }

    pub fn state(&self) -> &CrawlState {
        &self.state
    }

    /// Number of tasks still waiting in the frontier
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Consumes the crawler, keeping only its accumulated state
    pub fn into_state(self) -> CrawlState {
        self.state
    }
}

/// Serializes the root the same way `Url::join` serializes discovered links
///
/// `http://EXAMPLE.com` becomes `http://example.com/`. An unparseable root is
/// kept as given so the validity filter can reject it.
fn root_url(root: &str) -> String {
    match Url::parse(root) {
        Ok(url) => canonicalize(url.as_str()),
        Err(_) => canonicalize(root),
    }
}
