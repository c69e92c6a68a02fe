//! Release tag listing via the hosting REST API
//!
//! Tag names come back verbatim; deciding which of them are versions is
//! the selector's job, not the source's.

use serde::Deserialize;
use tracing::warn;

use crate::config::{FETCH_TIMEOUT, GITHUB_API_BASE_URL, TAGS_PER_PAGE, USER_AGENT};
use crate::source::error::SourceError;

#[cfg(test)]
use mockall::automock;

/// One entry of the tag listing response.
#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// Trait for listing a repository's tag names.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TagSource: Send + Sync {
    /// Returns every tag name of `owner/repo`, in the order the hosting
    /// API reports them.
    async fn list_tags(&self, owner: &str, repo: &str) -> Result<Vec<String>, SourceError>;
}

/// Lists tags through the GitHub REST API, paging until exhausted.
pub struct GitHubTagSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubTagSource {
    /// Creates a tag source against a custom base URL.
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            token,
        }
    }

    /// Tag source against the public GitHub API, authenticated when a
    /// token is supplied.
    pub fn github(token: Option<String>) -> Self {
        Self::new(GITHUB_API_BASE_URL, token)
    }

    async fn fetch_page(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<Vec<Tag>, SourceError> {
        let url = format!(
            "{}/repos/{}/{}/tags?per_page={}&page={}",
            self.base_url, owner, repo, TAGS_PER_PAGE, page
        );

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(format!("{}/{}", owner, repo)));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(SourceError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("Tag listing returned status {}: {}", status, url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse tag listing response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait::async_trait]
impl TagSource for GitHubTagSource {
    async fn list_tags(&self, owner: &str, repo: &str) -> Result<Vec<String>, SourceError> {
        let mut names = Vec::new();

        for page in 1u32.. {
            let tags = self.fetch_page(owner, repo, page).await?;
            let page_len = tags.len();
            names.extend(tags.into_iter().map(|tag| tag.name));

            // A short page means the listing is exhausted.
            if page_len < TAGS_PER_PAGE as usize {
                break;
            }
        }

        Ok(names)
    }
}
