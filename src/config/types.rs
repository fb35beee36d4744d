use serde::Deserialize;

/// Default depth limit when neither the config file nor the CLI sets one
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Main configuration structure, as read from a TOML file
///
/// Every section and field is optional; a missing file is equivalent to
/// `Config::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub http: HttpConfig,
}

/// Crawl scope and filtering configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of hops from the root URL
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Only follow URLs starting with this prefix
    pub confine: Option<String>,

    /// Never follow URLs starting with any of these prefixes
    pub exclude: Vec<String>,

    /// Restrict traversal to the root URL's host
    #[serde(rename = "host-lock")]
    pub host_lock: bool,

    /// Only remember discovered links that pass the prefix and same-host filters
    #[serde(rename = "filter-remembered")]
    pub filter_remembered: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            confine: None,
            exclude: Vec::new(),
            host_lock: true,
            filter_remembered: true,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value as `name/version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Fully resolved inputs for a single crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Root URL the crawl starts from
    pub root: String,

    /// Tasks deeper than this stop the crawl
    pub depth_limit: u32,

    /// Confinement prefix
    pub confine: Option<String>,

    /// Excluded prefixes
    pub exclude: Vec<String>,

    /// Restrict traversal to the root's host
    pub host_locked: bool,

    /// Apply the out-link chain before remembering links
    pub filter_remembered: bool,
}

impl CrawlOptions {
    /// Creates options for `root` with the default depth and filters enabled
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            depth_limit: DEFAULT_MAX_DEPTH,
            confine: None,
            exclude: Vec::new(),
            host_locked: true,
            filter_remembered: true,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub depth: Option<u32>,
    pub confine: Option<String>,
    pub exclude: Vec<String>,
    pub no_host_lock: bool,
    pub all_links: bool,
}

impl Config {
    /// Resolves the crawl options for `root`, layering CLI overrides on top
    ///
    /// Scalar values from the CLI replace file values; excluded prefixes from
    /// both sources are combined. `no_host_lock` and `all_links` can only
    /// switch their feature off.
    pub fn crawl_options(&self, root: &str, overrides: &Overrides) -> CrawlOptions {
        let mut exclude = self.crawler.exclude.clone();
        for prefix in &overrides.exclude {
            if !exclude.contains(prefix) {
                exclude.push(prefix.clone());
            }
        }

        CrawlOptions {
            root: root.to_string(),
            depth_limit: overrides.depth.unwrap_or(self.crawler.max_depth),
            confine: overrides
                .confine
                .clone()
                .or_else(|| self.crawler.confine.clone()),
            exclude,
            host_locked: self.crawler.host_lock && !overrides.no_host_lock,
            filter_remembered: self.crawler.filter_remembered && !overrides.all_links,
        }
    }
}
