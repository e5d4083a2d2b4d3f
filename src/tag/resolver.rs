//! Dist-tag selection for a new package version

use std::cmp::Ordering;

use tracing::debug;

use crate::registry::types::DistTags;
use crate::tag::error::TagError;
use crate::tag::semver::{compare_precedence, parse_version, prerelease_identifier};
use crate::tag::types::{DistTag, PrereleaseChannel};

/// Determine the tag `new_version` should be published under.
///
/// The candidate tag comes from the shape of the version alone: `latest` for
/// stable releases, `dev` for `alpha`/`beta` prereleases and `next` for `rc`.
/// If the registry already has a strictly newer version under the candidate
/// tag, the result is [`DistTag::Patch`] so the tag is not moved backwards.
/// Only the candidate key of `dist_tags` is consulted.
pub fn resolve_tag(new_version: &str, dist_tags: &DistTags) -> Result<DistTag, TagError> {
    let version = parse_version(new_version).map_err(|source| TagError::InvalidVersion {
        version: new_version.to_string(),
        source,
    })?;

    let candidate = match prerelease_identifier(&version) {
        None => DistTag::Latest,
        Some(identifier) => identifier
            .parse::<PrereleaseChannel>()
            .map_err(|()| TagError::UnknownPrerelease {
                identifier: identifier.to_string(),
            })?
            .dist_tag(),
    };

    let Some(published) = dist_tags.get(candidate.as_str()) else {
        debug!("No {} dist-tag published yet", candidate);
        return Ok(candidate);
    };

    let published_version =
        parse_version(published).map_err(|source| TagError::InvalidPublishedVersion {
            tag: candidate,
            version: published.clone(),
            source,
        })?;

    // Equal versions keep the candidate tag.
    if compare_precedence(&published_version, &version) == Ordering::Greater {
        debug!(
            "{} already points to {}, newer than {}",
            candidate, published, new_version
        );
        Ok(DistTag::Patch)
    } else {
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tags(entries: &[(&str, &str)]) -> DistTags {
        entries
            .iter()
            .map(|(tag, version)| (tag.to_string(), version.to_string()))
            .collect()
    }

    // latest has never been published
    #[rstest]
    #[case("1.2.3", DistTag::Latest)]
    #[case("1.2.3-beta.1", DistTag::Dev)]
    #[case("1.2.3-alpha.0", DistTag::Dev)]
    #[case("1.2.3-rc.1", DistTag::Next)]
    #[case("1.2.3-alpha", DistTag::Dev)]
    #[case("v1.2.3", DistTag::Latest)]
    #[case("1.2.3+build.7", DistTag::Latest)]
    fn resolve_tag_without_published_tags(#[case] version: &str, #[case] expected: DistTag) {
        assert_eq!(resolve_tag(version, &DistTags::new()).unwrap(), expected);
    }

    // latest has been published
    #[rstest]
    #[case("1.2.3", &[("latest", "1.0.0")], DistTag::Latest)]
    #[case("1.2.3", &[("latest", "1.2.4")], DistTag::Patch)]
    // latest is a dev release
    #[case("1.2.3", &[("latest", "1.2.4-alpha.0")], DistTag::Patch)]
    #[case("1.2.4", &[("latest", "1.2.4-alpha.0")], DistTag::Latest)]
    // latest is a next release
    #[case("1.2.3", &[("latest", "1.2.4-rc.0")], DistTag::Patch)]
    #[case("1.2.4", &[("latest", "1.2.4-rc.0")], DistTag::Latest)]
    // dev dist-tag has been used
    #[case("1.2.3-alpha.2", &[("latest", "0.0.0"), ("dev", "1.2.3-alpha.1")], DistTag::Dev)]
    #[case("1.2.3-alpha.0", &[("latest", "0.0.0"), ("dev", "1.2.3-alpha.1")], DistTag::Patch)]
    #[case("1.2.3-beta.1", &[("latest", "0.0.0"), ("dev", "1.2.3")], DistTag::Patch)]
    #[case("1.2.4-beta.1", &[("latest", "0.0.0"), ("dev", "1.2.3")], DistTag::Dev)]
    // next dist-tag has been used
    #[case("1.2.3-rc.2", &[("latest", "0.0.0"), ("next", "1.2.3-rc.1")], DistTag::Next)]
    #[case("1.2.3-rc.0", &[("latest", "0.0.0"), ("next", "1.2.3-rc.1")], DistTag::Patch)]
    #[case("1.2.4-rc.1", &[("latest", "1.2.3"), ("next", "1.2.4")], DistTag::Patch)]
    // dev dist-tag has not been used
    #[case("1.2.3-alpha.0", &[("latest", "0.0.0"), ("foo", "1.2.3-alpha.1")], DistTag::Dev)]
    #[case("1.2.3-rc.0", &[("latest", "0.0.0"), ("foo", "1.2.3-alpha.1")], DistTag::Next)]
    // prereleases ignore a newer latest
    #[case("1.2.4-beta.1", &[("latest", "9.9.9")], DistTag::Dev)]
    fn resolve_tag_with_published_tags(
        #[case] version: &str,
        #[case] published: &[(&str, &str)],
        #[case] expected: DistTag,
    ) {
        assert_eq!(resolve_tag(version, &tags(published)).unwrap(), expected);
    }

    #[rstest]
    #[case("1.2.3", &[("latest", "1.2.3")], DistTag::Latest)]
    #[case("1.2.3-alpha.1", &[("dev", "1.2.3-alpha.1")], DistTag::Dev)]
    #[case("1.2.3-rc.1", &[("next", "1.2.3-rc.1")], DistTag::Next)]
    #[case("1.2.3+build.2", &[("latest", "1.2.3+build.1")], DistTag::Latest)]
    fn resolve_tag_keeps_candidate_when_published_version_is_equal(
        #[case] version: &str,
        #[case] published: &[(&str, &str)],
        #[case] expected: DistTag,
    ) {
        assert_eq!(resolve_tag(version, &tags(published)).unwrap(), expected);
    }

    #[rstest]
    #[case("1.2.3-preview.1")]
    #[case("1.2.3-0")]
    #[case("1.2.3-RC.1")]
    #[case("1.2.3-dev.1")]
    fn resolve_tag_rejects_unknown_prerelease(#[case] version: &str) {
        let err = resolve_tag(version, &DistTags::new()).unwrap_err();

        assert!(matches!(err, TagError::UnknownPrerelease { .. }));
        assert!(err.to_string().contains("cannot parse prerelease"));
    }

    #[rstest]
    #[case("")]
    #[case("1.2")]
    #[case("latest")]
    #[case("1.2.3.4")]
    fn resolve_tag_rejects_malformed_version(#[case] version: &str) {
        let err = resolve_tag(version, &DistTags::new()).unwrap_err();

        assert!(matches!(err, TagError::InvalidVersion { .. }));
    }

    #[test]
    fn resolve_tag_rejects_malformed_published_version_under_candidate() {
        let err = resolve_tag("1.2.3", &tags(&[("latest", "garbage")])).unwrap_err();

        assert!(matches!(
            err,
            TagError::InvalidPublishedVersion {
                tag: DistTag::Latest,
                ..
            }
        ));
    }

    #[test]
    fn resolve_tag_ignores_malformed_version_under_unrelated_tag() {
        let result = resolve_tag("1.2.3", &tags(&[("dev", "garbage"), ("beta", "???")]));

        assert_eq!(result.unwrap(), DistTag::Latest);
    }
}
