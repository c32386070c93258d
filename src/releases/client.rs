//! Blocking HTTP client for the releases endpoint.

use anyhow::Context;
use std::time::Duration;

use crate::error::{LabprobeError, Result};
use crate::releases::record::{first_stable, ReleaseRecord};

/// Default API base URL (overridable for GitHub Enterprise hosts and tests).
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default organization to query.
pub const DEFAULT_OWNER: &str = "jupyterlab";

/// Default repository to query.
pub const DEFAULT_REPO: &str = "jupyterlab";

/// Request timeout for the releases endpoint.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for fetching release listings.
///
/// # Example
///
/// ```no_run
/// use labprobe::releases::ReleaseClient;
///
/// let client = ReleaseClient::new().unwrap();
/// let latest = client.latest_stable("jupyterlab", "jupyterlab").unwrap();
/// ```
pub struct ReleaseClient {
    /// API base URL, without a trailing slash.
    api_url: String,
    /// Bearer token sent with requests, when available.
    token: Option<String>,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl ReleaseClient {
    /// Create a client against the default API URL.
    ///
    /// A bearer token is picked up from `GITHUB_TOKEN` when set;
    /// unauthenticated requests rate-limit quickly in CI.
    pub fn new() -> Result<Self> {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Create a client against a custom API base URL.
    pub fn with_api_url(api_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("labprobe/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            client,
        })
    }

    /// Override the bearer token (`None` disables auth).
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Get the configured API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the full release listing for a repository.
    pub fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<ReleaseRecord>> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, owner, repo);
        tracing::debug!(%url, "fetching release listing");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LabprobeError::ReleaseFetchFailed {
                status: status.as_u16(),
                url,
            });
        }

        let records: Vec<ReleaseRecord> = response
            .json()
            .with_context(|| format!("Failed to parse release listing from {}", url))?;
        tracing::debug!(count = records.len(), "release listing fetched");
        Ok(records)
    }

    /// Find the latest stable release version for a repository.
    ///
    /// Returns `Ok(None)` when every release is a draft or pre-release.
    pub fn latest_stable(&self, owner: &str, repo: &str) -> Result<Option<String>> {
        let records = self.list_releases(owner, repo)?;
        first_stable(&records)
    }
}
