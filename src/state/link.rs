//! Link definitions for recording discovered edges

use std::fmt;

/// Kind recorded for links found in `<a href>` elements
pub const HREF: &str = "href";

/// A directed edge discovered while crawling
///
/// Equality, hashing and ordering all use the full
/// `(source, destination, kind)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link {
    source: String,
    destination: String,
    kind: String,
}

impl Link {
    /// Creates a new link
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            kind: kind.into(),
        }
    }

    /// Creates an anchor (`href`) link
    pub fn href(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(source, destination, HREF)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display() {
        let link = Link::href("http://example.com/a", "http://example.com/b");
        assert_eq!(link.to_string(), "http://example.com/a -> http://example.com/b");
    }

    #[test]
    fn test_equality_uses_full_triple() {
        let a = Link::new("s", "d", "href");
        assert_eq!(a, Link::new("s", "d", "href"));
        assert_ne!(a, Link::new("s", "d", "img"));
        assert_ne!(a, Link::new("s", "x", "href"));
        assert_ne!(a, Link::new("x", "d", "href"));
    }

    #[test]
    fn test_hash_set_dedup() {
        let mut set = HashSet::new();
        assert!(set.insert(Link::href("s", "d")));
        assert!(!set.insert(Link::href("s", "d")));
        assert!(set.insert(Link::new("s", "d", "img")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_accessors() {
        let link = Link::href("s", "d");
        assert_eq!(link.source(), "s");
        assert_eq!(link.destination(), "d");
        assert_eq!(link.kind(), HREF);
    }
}
