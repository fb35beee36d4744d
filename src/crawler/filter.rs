//! URL filter chains
//!
//! A filter decides whether a URL may be used in some context, based on the
//! crawl's scope and what it has visited so far. Filters are grouped into
//! ordered chains that stop at the first rejection.

use crate::config::CrawlOptions;
use crate::state::CrawlState;
use crate::url::{has_prefix, host_matches, matches_any_prefix, network_location};
use std::fmt;

/// The fixed boundaries of a crawl
#[derive(Debug, Clone)]
pub struct CrawlScope {
    /// Network location of the root URL
    pub host: String,

    /// Confinement prefix
    pub confine: Option<String>,

    /// Excluded prefixes
    pub exclude: Vec<String>,

    /// Restrict traversal to `host`
    pub host_locked: bool,
}

impl CrawlScope {
    /// Derives the scope from crawl options
    ///
    /// The host comes from the root URL. A root without a usable network
    /// location gets an empty host, which the validity filter later rejects.
    pub fn from_options(options: &CrawlOptions) -> Self {
        let host = match network_location(&options.root) {
            Ok(host) => host,
            Err(e) => {
                tracing::warn!("Root URL has no usable host: {}", e);
                String::new()
            }
        };

        Self {
            host,
            confine: options.confine.clone(),
            exclude: options.exclude.clone(),
            host_locked: options.host_locked,
        }
    }
}

/// What a filter can see when judging a URL
pub struct FilterContext<'a> {
    pub scope: &'a CrawlScope,
    pub state: &'a CrawlState,
}

/// A single URL predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlFilter {
    /// URL starts with the confinement prefix, or none is set
    Prefix,
    /// URL starts with none of the excluded prefixes
    Exclude,
    /// URL has not been visited yet
    NotVisited,
    /// URL is absolute with a non-empty network location
    ValidUrl,
    /// URL is on the crawl host, or host locking is off
    LockHost,
    /// URL is on the crawl host
    SameHost,
}

impl UrlFilter {
    /// Short name used in log messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Exclude => "exclude",
            Self::NotVisited => "not-visited",
            Self::ValidUrl => "valid-url",
            Self::LockHost => "lock-host",
            Self::SameHost => "same-host",
        }
    }

    /// Returns true if the URL passes this filter
    pub fn accepts(&self, url: &str, ctx: &FilterContext<'_>) -> bool {
        match self {
            Self::Prefix => has_prefix(url, ctx.scope.confine.as_deref()),
            Self::Exclude => !matches_any_prefix(url, &ctx.scope.exclude),
            Self::NotVisited => !ctx.state.is_visited(url),
            Self::ValidUrl => network_location(url).is_ok(),
            Self::LockHost => !ctx.scope.host_locked || same_host(url, ctx.scope),
            Self::SameHost => same_host(url, ctx.scope),
        }
    }
}

impl fmt::Display for UrlFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn same_host(url: &str, scope: &CrawlScope) -> bool {
    match network_location(url) {
        Ok(host) => host_matches(&host, &scope.host),
        Err(e) => {
            tracing::debug!("Can't process url '{}' ({})", url, e);
            false
        }
    }
}

/// An ordered, short-circuiting list of filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    filters: Vec<UrlFilter>,
}

impl FilterChain {
    /// Creates a chain from filters, evaluated in the given order
    pub fn new(filters: Vec<UrlFilter>) -> Self {
        Self { filters }
    }

    /// Filters a URL must pass before it is fetched
    pub fn pre_visit() -> Self {
        Self::new(vec![
            UrlFilter::Prefix,
            UrlFilter::Exclude,
            UrlFilter::NotVisited,
            UrlFilter::ValidUrl,
            UrlFilter::LockHost,
        ])
    }

    /// Filters a discovered link must pass before it is remembered
    ///
    /// When `enabled` is false the chain is empty and accepts everything.
    pub fn out_link(enabled: bool) -> Self {
        if enabled {
            Self::new(vec![UrlFilter::Prefix, UrlFilter::SameHost])
        } else {
            Self::default()
        }
    }

    /// Returns the first filter that rejects the URL, if any
    pub fn first_rejection(&self, url: &str, ctx: &FilterContext<'_>) -> Option<UrlFilter> {
        self.filters.iter().copied().find(|f| !f.accepts(url, ctx))
    }

    /// Returns true if every filter accepts the URL
    pub fn accepts(&self, url: &str, ctx: &FilterContext<'_>) -> bool {
        self.first_rejection(url, ctx).is_none()
    }

    pub fn filters(&self) -> &[UrlFilter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
