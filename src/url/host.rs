use crate::{UrlError, UrlResult};
use url::Url;

/// Extracts the network location (`host` or `host:port`) from a URL string
///
/// The port is only included when it differs from the scheme's default, since
/// the `url` crate drops default ports while parsing. Hosts come back
/// lowercased.
///
/// # Arguments
///
/// * `url` - An absolute URL string
///
/// # Returns
///
/// * `Ok(String)` - The network location
/// * `Err(UrlError::Parse)` - The string is not an absolute URL
/// * `Err(UrlError::MissingHost)` - The URL parses but has no host (e.g. `mailto:`)
///
/// # Examples
///
/// ```
/// use webcrawler::url::network_location;
///
/// assert_eq!(network_location("https://example.com/path").unwrap(), "example.com");
/// assert_eq!(network_location("http://127.0.0.1:8080/").unwrap(), "127.0.0.1:8080");
/// assert!(network_location("/relative/path").is_err());
/// assert!(network_location("mailto:someone@example.com").is_err());
/// ```
pub fn network_location(url: &str) -> UrlResult<String> {
    let parsed = Url::parse(url).map_err(|e| UrlError::Parse(format!("{}: {}", url, e)))?;

    let host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return Err(UrlError::MissingHost(url.to_string())),
    };

    Ok(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
