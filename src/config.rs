use std::time::Duration;

// =============================================================================
// Endpoints
// =============================================================================

/// Base URL for the GitHub REST API.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Base URL for raw file content of public repositories.
pub const RAW_CONTENT_BASE_URL: &str = "https://raw.githubusercontent.com";

// =============================================================================
// HTTP behavior
// =============================================================================

/// User agent sent with every outgoing request.
pub const USER_AGENT: &str = "version-gate";

/// Timeout for fetch operations (30 seconds).
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Page size used when listing tags.
pub const TAGS_PER_PAGE: u32 = 100;
