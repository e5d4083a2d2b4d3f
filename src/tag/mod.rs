//! Tag selection layer
//!
//! Decides which dist-tag a new version is published under, from the version
//! itself and the dist-tags the registry currently holds.
//!
//! # Modules
//!
//! - [`resolver`]: `resolve_tag`, the selection algorithm
//! - [`types`]: `DistTag` and the closed set of `PrereleaseChannel`s
//! - [`semver`]: version parsing and precedence helpers
//! - [`error`]: `TagError`

pub mod error;
pub mod resolver;
pub mod semver;
pub mod types;

pub use error::TagError;
pub use resolver::resolve_tag;
pub use types::{DistTag, PrereleaseChannel};
