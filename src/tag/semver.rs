use std::cmp::Ordering;

use semver::Version;

/// Parse a version string the way npm does for published versions.
///
/// Surrounding whitespace and a single leading `v` or `=` are ignored.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "v1.2.3-beta.1" -> Version(1, 2, 3, pre: beta.1)
/// - " =1.2.3 " -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Result<Version, semver::Error> {
    let trimmed = version.trim();
    let stripped = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('='))
        .unwrap_or(trimmed);
    Version::parse(stripped)
}

/// Compare two versions by semantic-version precedence.
///
/// Build metadata does not take part in precedence, so `1.0.0+a` and
/// `1.0.0+b` compare equal. A release ranks above its prereleases.
pub fn compare_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

/// First dot-separated identifier of the prerelease segment, if any.
pub fn prerelease_identifier(version: &Version) -> Option<&str> {
    if version.pre.is_empty() {
        return None;
    }
    version.pre.as_str().split('.').next()
}
