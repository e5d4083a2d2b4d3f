use thiserror::Error;

use crate::tag::types::DistTag;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("invalid version {version:?}: {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("cannot parse prerelease: unrecognized identifier {identifier:?}")]
    UnknownPrerelease { identifier: String },

    #[error("dist-tag {tag} points to an invalid version {version:?}: {source}")]
    InvalidPublishedVersion {
        tag: DistTag,
        version: String,
        #[source]
        source: semver::Error,
    },
}
