//! The upgrade decision
//!
//! Compares the package version on a branch against the latest
//! previously released tag on the same release track and derives the
//! two booleans downstream pipeline steps branch on.

use thiserror::Error;
use tracing::debug;

use crate::source::error::SourceError;
use crate::source::manifest::ManifestSource;
use crate::source::tags::TagSource;
use crate::version::error::ParseVersionError;
use crate::version::selector::{TrackFilter, select_latest};
use crate::version::semver::Version;

/// Inputs of one evaluation, as handed over by the pipeline.
#[derive(Debug, Clone)]
pub struct ActionParams {
    pub owner: String,
    pub repo: String,
    /// Bare branch name or a fully qualified `refs/heads/` ref.
    pub branch: String,
    /// Token used for the tag listing API; anonymous when absent.
    pub github_token: Option<String>,
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub from_version: Version,
    pub to_version: Version,
    pub is_upgraded_version: bool,
    /// Only meaningful when `is_upgraded_version` is set.
    pub is_release_beta: bool,
}

#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error("no version in package.json on {owner}/{repo}#{branch} (or the repository is private)")]
    CurrentVersionUnavailable {
        owner: String,
        repo: String,
        branch: String,
    },

    #[error("current version: {0}")]
    InvalidCurrentVersion(#[from] ParseVersionError),

    #[error("tag listing failed: {0}")]
    TagListing(#[from] SourceError),
}

/// Evaluates whether the version on `params.branch` is an upgrade over
/// the latest release tag on the same track.
///
/// The prior version is always looked up within the current version's
/// track: beta against beta tags, stable against stable tags. With no
/// prior tag on that track the comparison baseline is `0.0.0`.
pub async fn evaluate(
    params: &ActionParams,
    manifest: &dyn ManifestSource,
    tags: &dyn TagSource,
) -> Result<Decision, EvaluateError> {
    // The pipeline hands over either a bare branch name or the fully
    // qualified ref, depending on what triggered the run.
    let branch = params
        .branch
        .strip_prefix("refs/heads/")
        .unwrap_or(&params.branch);

    let current = manifest
        .fetch_version(&params.owner, &params.repo, branch)
        .await
        .ok_or_else(|| EvaluateError::CurrentVersionUnavailable {
            owner: params.owner.clone(),
            repo: params.repo.clone(),
            branch: branch.to_string(),
        })?;

    let to_version: Version = current.parse()?;
    debug!(
        "Version on {}/{}#{} is {}",
        params.owner, params.repo, branch, to_version
    );

    let filter = TrackFilter::for_version(&to_version);
    let tag_names = tags.list_tags(&params.owner, &params.repo).await?;

    // An empty release history counts as upgrading from the zero baseline.
    let from_version = select_latest(&tag_names, filter).unwrap_or(Version::ZERO);
    debug!("Last released version was {}", from_version);

    let is_upgraded_version = to_version > from_version;
    let is_release_beta = is_upgraded_version && to_version.is_beta();
    debug!("Is version upgraded: {}", is_upgraded_version);
    debug!("Is release beta: {}", is_release_beta);

    Ok(Decision {
        from_version,
        to_version,
        is_upgraded_version,
        is_release_beta,
    })
}
