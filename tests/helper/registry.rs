//! Registry test utilities

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use dist_tag::registry::{DistTagLookup, DistTags, Registry, RegistryError};

/// Mock registry for testing
///
/// Packages without registered dist-tags are reported as unpublished.
#[derive(Default)]
pub struct MockRegistry {
    dist_tags: HashMap<String, DistTags>,
    calls: AtomicUsize,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dist_tags(mut self, package: &str, tags: &[(&str, &str)]) -> Self {
        self.dist_tags.insert(
            package.to_string(),
            tags.iter()
                .map(|(tag, version)| (tag.to_string(), version.to_string()))
                .collect(),
        );
        self
    }

    /// Number of lookups performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_dist_tags(&self, package_name: &str) -> Result<DistTagLookup, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.dist_tags.get(package_name) {
            Some(tags) => Ok(DistTagLookup::Published(tags.clone())),
            None => Ok(DistTagLookup::Unpublished),
        }
    }
}
