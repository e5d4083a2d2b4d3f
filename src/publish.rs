//! Publish tag determination: manifest -> registry -> resolver

use thiserror::Error;
use tracing::{debug, info};

use crate::manifest::{ManifestError, ManifestSource};
use crate::registry::{Registry, RegistryError};
use crate::tag::{DistTag, TagError, resolve_tag};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Tag(#[from] TagError),
}

/// Determine the dist-tag for the package described by `manifest`.
///
/// Loads the manifest, performs a single dist-tag lookup for its name and
/// resolves the tag for its version. Any failure is returned as is.
pub async fn determine_tag<M, R>(manifest: &M, registry: &R) -> Result<DistTag, Error>
where
    M: ManifestSource + ?Sized,
    R: Registry + ?Sized,
{
    let manifest = manifest.load()?;
    debug!("Manifest: {}@{}", manifest.name, manifest.version);

    let dist_tags = registry
        .fetch_dist_tags(&manifest.name)
        .await?
        .into_dist_tags();

    let tag = resolve_tag(&manifest.version, &dist_tags)?;
    info!("{}@{} -> {}", manifest.name, manifest.version, tag);

    Ok(tag)
}
