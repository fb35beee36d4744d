//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent and timeouts
//! - GET requests to fetch page content
//! - Rejecting non-HTML responses
//! - Error classification
//!
//! There are no retries: a failed fetch just yields no links.

use crate::config::{HttpConfig, UserAgentConfig};
use crate::crawler::parser::extract_links;
use crate::CrawlError;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Media type of the only content the crawler parses
pub const HTML_MEDIA_TYPE: &str = "text/html";

/// Source of outbound links for a page
///
/// The crawler only depends on this trait, so traversal can be driven by the
/// HTTP implementation below or by an in-memory site in tests.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Returns the absolute outbound links of the page at `url`
    ///
    /// Pages that cannot be retrieved or are not HTML produce an empty list.
    /// An `Err` is reserved for unexpected failures; the crawler logs it and
    /// moves on to the next task.
    async fn out_links(&self, url: &str) -> Result<Vec<String>, CrawlError>;
}

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched an HTML page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Media type of the response
        content_type: String,
        /// Page body content
        body: String,
    },

    /// Response is not HTML
    ContentMismatch {
        /// URL that answered
        final_url: String,
        /// The media type received (empty when the header is missing)
        content_type: String,
    },

    /// Non-success HTTP status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Timeout configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use webcrawler::config::{HttpConfig, UserAgentConfig};
/// use webcrawler::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(http.timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Reduces a `Content-Type` header value to its lowercased media type
///
/// `text/HTML; charset=utf-8` becomes `text/html`.
pub fn media_type(header_value: &str) -> String {
    header_value
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Fetches a URL and classifies the outcome
///
/// # Request Flow
///
/// 1. Send a GET request (redirects are followed by the client)
/// 2. Non-success status → `HttpError`
/// 3. Media type other than `text/html` → `ContentMismatch`
/// 4. Read the body → `Success`
///
/// # Returns
///
/// * `Ok(FetchResult)` - The classified outcome
/// * `Err(CrawlError::Http)` - The response started but its body could not be read
pub async fn fetch_url(client: &Client, url: &Url) -> Result<FetchResult, CrawlError> {
    tracing::debug!("Attempt to connect to {}", url.host_str().unwrap_or(""));

    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            return Ok(FetchResult::NetworkError { error });
        }
    };

    tracing::debug!("Successfully connected to host");
    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return Ok(FetchResult::HttpError {
            status_code: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(media_type)
        .unwrap_or_default();
    tracing::debug!("Mimetype is {}", content_type);

    if content_type != HTML_MEDIA_TYPE {
        return Ok(FetchResult::ContentMismatch {
            final_url,
            content_type,
        });
    }

    let body = response.text().await.map_err(|source| CrawlError::Http {
        url: final_url.clone(),
        source,
    })?;

    Ok(FetchResult::Success {
        final_url,
        status_code: status.as_u16(),
        content_type,
        body,
    })
}

/// Link source backed by a real HTTP client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from user agent and timeout configuration
    pub fn from_config(
        user_agent: &UserAgentConfig,
        http: &HttpConfig,
    ) -> Result<Self, CrawlError> {
        Ok(Self::new(build_http_client(user_agent, http)?))
    }
}

impl PageFetcher for HttpFetcher {
    async fn out_links(&self, url: &str) -> Result<Vec<String>, CrawlError> {
        let page_url = Url::parse(url)?;

        match fetch_url(&self.client, &page_url).await? {
            FetchResult::Success {
                final_url,
                status_code,
                body,
                ..
            } => {
                tracing::debug!("Parsing page {} (HTTP {}, final URL {})", url, status_code, final_url);
                // Links resolve against the requested URL, not the redirect target
                let links = extract_links(&body, &page_url);
                tracing::debug!("Found {} links on {}", links.len(), url);
                Ok(links)
            }

            FetchResult::ContentMismatch {
                final_url,
                content_type,
            } => {
                tracing::debug!("Skipping {} (has mimetype {})", final_url, content_type);
                Ok(Vec::new())
            }

            FetchResult::HttpError { status_code } => {
                if status_code == StatusCode::NOT_FOUND.as_u16() {
                    tracing::debug!("Error 404 while fetching {}", url);
                } else {
                    tracing::debug!("Error HTTP {} while fetching {}", status_code, url);
                }
                Ok(Vec::new())
            }

            FetchResult::NetworkError { error } => {
                tracing::debug!("Error {} while fetching {}", error, url);
                Ok(Vec::new())
            }
        }
    }
}
