use std::path::PathBuf;

use crate::registry::npm::DEFAULT_BASE_URL;

/// Manifest read when no path is given
pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

/// Environment variable npm itself uses to override the registry
pub const REGISTRY_ENV: &str = "npm_config_registry";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub manifest_path: PathBuf,
    pub registry_url: String,
}

impl Config {
    /// Build the configuration from command line values and the process environment.
    pub fn from_args(manifest: Option<PathBuf>, registry: Option<String>) -> Self {
        Self::with_env(manifest, registry, std::env::var(REGISTRY_ENV).ok())
    }

    fn with_env(
        manifest: Option<PathBuf>,
        registry: Option<String>,
        registry_env: Option<String>,
    ) -> Self {
        Self {
            manifest_path: manifest.unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_FILE)),
            registry_url: registry_url_with_env(registry, registry_env),
        }
    }
}

/// Returns the registry URL.
/// Uses the --registry flag if given, otherwise $npm_config_registry,
/// or the public npm registry if neither is set.
fn registry_url_with_env(flag: Option<String>, env: Option<String>) -> String {
    flag.into_iter()
        .chain(env)
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
