//! Common types for registry lookups

use std::collections::HashMap;

/// Dist-tags mapping tag names to versions (e.g., "latest" -> "4.17.21")
pub type DistTags = HashMap<String, String>;

/// Outcome of a dist-tag lookup that reached the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistTagLookup {
    /// The package exists; its current dist-tags
    Published(DistTags),
    /// The registry has never seen this package
    Unpublished,
}

impl DistTagLookup {
    /// Returns the dist-tags, treating an unpublished package as having none
    pub fn into_dist_tags(self) -> DistTags {
        match self {
            DistTagLookup::Published(tags) => tags,
            DistTagLookup::Unpublished => DistTags::new(),
        }
    }
}
