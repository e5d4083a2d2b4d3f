//! Tag names and prerelease channels

use std::fmt;
use std::str::FromStr;

/// Distribution tag a new version is published under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistTag {
    /// Stable release
    Latest,
    /// alpha/beta prerelease
    Dev,
    /// Release candidate
    Next,
    /// Older than what the candidate tag already points to
    Patch,
}

impl DistTag {
    /// Returns the tag name as it is passed to `npm publish --tag`
    pub fn as_str(&self) -> &'static str {
        match self {
            DistTag::Latest => "latest",
            DistTag::Dev => "dev",
            DistTag::Next => "next",
            DistTag::Patch => "patch",
        }
    }
}

impl fmt::Display for DistTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized leading prerelease identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrereleaseChannel {
    Alpha,
    Beta,
    Rc,
}

impl PrereleaseChannel {
    /// Returns the tag a prerelease on this channel is published under
    pub fn dist_tag(&self) -> DistTag {
        match self {
            PrereleaseChannel::Alpha | PrereleaseChannel::Beta => DistTag::Dev,
            PrereleaseChannel::Rc => DistTag::Next,
        }
    }
}

impl FromStr for PrereleaseChannel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha" => Ok(PrereleaseChannel::Alpha),
            "beta" => Ok(PrereleaseChannel::Beta),
            "rc" => Ok(PrereleaseChannel::Rc),
            _ => Err(()),
        }
    }
}
