//! URL handling module
//!
//! This module provides URL canonicalization, network-location extraction,
//! and the prefix and host matching used by the crawler's filters.

mod canonical;
mod host;
mod matcher;

// Re-export main functions
pub use canonical::canonicalize;
pub use host::network_location;
pub use matcher::{has_prefix, host_matches, matches_any_prefix};
