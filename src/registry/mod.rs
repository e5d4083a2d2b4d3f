//! Registry layer
//! - traits.rs: Registry trait definition
//! - types.rs: Common types (DistTags, DistTagLookup)
//! - error.rs: RegistryError
//! - npm.rs: npm registry API

pub mod error;
pub mod npm;
pub mod traits;
pub mod types;

pub use error::RegistryError;
pub use npm::NpmRegistry;
pub use traits::Registry;
pub use types::{DistTagLookup, DistTags};
