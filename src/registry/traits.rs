//! Registry trait for looking up the dist-tags of a package

#[cfg(test)]
use mockall::automock;

use crate::registry::error::RegistryError;
use crate::registry::types::DistTagLookup;

/// Trait for fetching the current dist-tags of a package from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the dist-tags currently published for a package
    ///
    /// Performs exactly one lookup, with no retries.
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "lodash" or "@types/node")
    ///
    /// # Returns
    /// * `Ok(DistTagLookup::Published(tags))` - The package exists
    /// * `Ok(DistTagLookup::Unpublished)` - The registry does not know the package
    /// * `Err(RegistryError)` - Any other failure
    async fn fetch_dist_tags(&self, package_name: &str) -> Result<DistTagLookup, RegistryError>;
}
