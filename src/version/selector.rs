//! Selection of the latest released version from a set of tag names.
//!
//! Repositories routinely carry tags that are not versions at all
//! (`latest`, `nightly`, tooling markers); those are skipped rather than
//! treated as errors.

use crate::version::semver::Version;

/// Which release track to select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFilter {
    /// Keep only beta pre-releases.
    OnlyBeta,
    /// Keep only stable releases.
    IgnoreBeta,
}

impl TrackFilter {
    /// The track a prior release must be on to compare against `version`.
    pub fn for_version(version: &Version) -> Self {
        if version.is_beta() {
            TrackFilter::OnlyBeta
        } else {
            TrackFilter::IgnoreBeta
        }
    }

    fn keeps(self, version: &Version) -> bool {
        match self {
            TrackFilter::OnlyBeta => version.is_beta(),
            TrackFilter::IgnoreBeta => !version.is_beta(),
        }
    }
}

/// Returns the greatest version among `tags` on the filtered track, or
/// `None` when no tag parses onto that track.
pub fn select_latest<I, S>(tags: I, filter: TrackFilter) -> Option<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| tag.as_ref().parse::<Version>().ok())
        .filter(|version| filter.keeps(version))
        .max()
}
