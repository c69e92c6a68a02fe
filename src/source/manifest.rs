//! Package manifest fetch over raw file content
//!
//! The current version of a branch is whatever its `package.json`
//! declares. Every failure class (missing file, missing field, private
//! repository, network error) collapses into `None`; the caller decides
//! how fatal that is.

use serde::Deserialize;
use tracing::warn;

use crate::config::{FETCH_TIMEOUT, RAW_CONTENT_BASE_URL, USER_AGENT};

#[cfg(test)]
use mockall::automock;

/// The subset of the package manifest this crate reads.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Trait for resolving the current package version of a branch.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ManifestSource: Send + Sync {
    /// Returns the manifest `version` string for `owner/repo` on `branch`,
    /// or `None` when it cannot be resolved.
    async fn fetch_version(&self, owner: &str, repo: &str, branch: &str) -> Option<String>;
}

/// Fetches `package.json` from raw GitHub content.
pub struct GitHubManifestSource {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubManifestSource {
    /// Creates a manifest source against a custom base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for GitHubManifestSource {
    fn default() -> Self {
        Self::new(RAW_CONTENT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl ManifestSource for GitHubManifestSource {
    async fn fetch_version(&self, owner: &str, repo: &str, branch: &str) -> Option<String> {
        let url = format!(
            "{}/{}/{}/{}/package.json",
            self.base_url, owner, repo, branch
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Raw content fetch returned status {}: {}", status, url);
            return None;
        }

        let manifest: PackageManifest = match response.json().await {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!("Failed to parse package manifest at {}: {}", url, e);
                return None;
            }
        };

        manifest.version
    }
}
