//! HTML link extraction
//!
//! This module turns an HTML body into the page's outbound links:
//! - Every `<a href="...">` value, in document order
//! - Resolved against the page URL to an absolute URL
//! - Deduplicated within the page

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the raw `href` value of every anchor element
///
/// Attribute values come back with HTML character references already decoded,
/// so `a?x=1&amp;y=2` is returned as `a?x=1&y=2`. Anchors without an `href`
/// are skipped; empty `href`s are kept.
///
/// # Example
///
/// ```
/// use webcrawler::crawler::extract_hrefs;
///
/// let html = r#"<html><body><a href="/page">Link</a><a name="top"></a></body></html>"#;
/// assert_eq!(extract_hrefs(html), vec!["/page".to_string()]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut hrefs = Vec::new();
    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                hrefs.push(href.to_string());
            }
        }
    }

    hrefs
}

/// Resolves hrefs against the page URL, keeping the first occurrence of each
///
/// Hrefs that cannot be joined onto `base_url` are logged and dropped. Nothing
/// is filtered by scheme here; `mailto:` and similar links come through and
/// are rejected later by the crawler's validity filter.
pub fn resolve_links<S: AsRef<str>>(hrefs: &[S], base_url: &Url) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for href in hrefs {
        let href = href.as_ref();
        match base_url.join(href) {
            Ok(absolute) => {
                let absolute = absolute.to_string();
                if seen.insert(absolute.clone()) {
                    links.push(absolute);
                }
            }
            Err(e) => {
                tracing::debug!("Skipping href '{}' on {}: {}", href, base_url, e);
            }
        }
    }

    links
}

/// Extracts the outbound links of an HTML page as absolute URLs
///
/// # Arguments
///
/// * `html` - The HTML content
/// * `base_url` - The URL the page was requested from
///
/// # Returns
///
/// The page's distinct absolute link targets, in document order
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    resolve_links(&extract_hrefs(html), base_url)
}
