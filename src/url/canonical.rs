/// Reduces a URL to the canonical form used for visited/seen bookkeeping
///
/// The only normalization applied is removal of the fragment component, so
/// `http://foo.com/blah.html#baz` becomes `http://foo.com/blah.html`. Nothing
/// else about the URL is touched: scheme, host case, path and query are kept
/// exactly as given, which keeps the operation valid for strings that are not
/// parseable URLs.
///
/// # Examples
///
/// ```
/// use webcrawler::url::canonicalize;
///
/// assert_eq!(canonicalize("http://foo.com/blah.html#baz"), "http://foo.com/blah.html");
/// assert_eq!(canonicalize("http://foo.com/blah.html"), "http://foo.com/blah.html");
/// ```
pub fn canonicalize(url: &str) -> String {
    match url.split_once('#') {
        Some((base, _fragment)) => base.to_string(),
        None => url.to_string(),
    }
}
