//! Manifest trait definition

use std::path::PathBuf;

use crate::manifest::types::Manifest;

/// Trait for loading the manifest of the package about to be published
pub trait ManifestSource {
    /// Load the manifest and validate its required fields
    fn load(&self) -> Result<Manifest, ManifestError>;
}

/// Error type for manifest loading
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file is missing or unreadable
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON
    #[error("Failed to parse {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required field is absent
    #[error("the package.json file must have a {0} field")]
    MissingField(&'static str),
}
