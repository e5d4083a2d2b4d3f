//! package.json reader

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::manifest::traits::{ManifestError, ManifestSource};
use crate::manifest::types::Manifest;

/// Fields of package.json the reader cares about
#[derive(Debug, Deserialize)]
struct PackageJson {
    name: Option<String>,
    version: Option<String>,
}

/// Reader for a package.json file on disk
pub struct PackageJsonReader {
    path: PathBuf,
}

impl PackageJsonReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse package.json content and extract name and version
    fn parse(&self, content: &str) -> Result<Manifest, ManifestError> {
        let package: PackageJson = serde_json::from_str(content).map_err(|source| {
            warn!("Failed to parse {}: {}", self.path.display(), source);
            ManifestError::InvalidJson {
                path: self.path.clone(),
                source,
            }
        })?;

        let name = package.name.ok_or(ManifestError::MissingField("name"))?;
        let version = package
            .version
            .ok_or(ManifestError::MissingField("version"))?;

        Ok(Manifest { name, version })
    }
}

impl ManifestSource for PackageJsonReader {
    fn load(&self) -> Result<Manifest, ManifestError> {
        debug!("Reading manifest: {}", self.path.display());
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| ManifestError::Read {
                path: self.path.clone(),
                source,
            })?;

        self.parse(&content)
    }
}
