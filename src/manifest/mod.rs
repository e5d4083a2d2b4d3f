//! Manifest layer
//! - traits.rs: ManifestSource trait and ManifestError
//! - types.rs: Manifest (name and version)
//! - package_json.rs: package.json reader

pub mod package_json;
pub mod traits;
pub mod types;

pub use package_json::PackageJsonReader;
pub use traits::{ManifestError, ManifestSource};
pub use types::Manifest;
