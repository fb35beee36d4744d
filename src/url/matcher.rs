/// Checks a URL against an optional confinement prefix
///
/// Passes when no prefix is configured, or when the URL starts with it. This
/// is a plain string comparison: `http://example.com/docs` also admits
/// `http://example.com/docs-old/`.
pub fn has_prefix(url: &str, prefix: Option<&str>) -> bool {
    prefix.map_or(true, |p| url.starts_with(p))
}

/// Returns true if the URL starts with any of the given prefixes
pub fn matches_any_prefix<S: AsRef<str>>(url: &str, prefixes: &[S]) -> bool {
    prefixes.iter().any(|p| url.starts_with(p.as_ref()))
}

/// Checks whether a candidate network location belongs to the crawl host
///
/// The crawl host only has to occur somewhere in the candidate, so
/// `www.example.com` and `docs.example.com` both match a crawl of
/// `example.com`. An empty crawl host matches everything.
///
/// # Examples
///
/// ```
/// use webcrawler::url::host_matches;
///
/// assert!(host_matches("example.com", "example.com"));
/// assert!(host_matches("www.example.com", "example.com"));
/// assert!(!host_matches("other.com", "example.com"));
/// ```
pub fn host_matches(candidate: &str, crawl_host: &str) -> bool {
    candidate.contains(crawl_host)
}
