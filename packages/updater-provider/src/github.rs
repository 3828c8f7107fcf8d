use async_trait::async_trait;
use hyper::Uri;
use log::debug;
use std::collections::HashMap;
use std::time::Duration;

use updater_utils::http::get;

use crate::data::ReleaseData;
use crate::error::UpdateError;

pub const GITHUB_API_URL: &str = "https://api.github.com";

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "ipa-updater";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Source of release metadata. Abstracted so the checker can be driven by
/// canned data in tests.
#[async_trait]
pub trait ReleaseProvider: Send + Sync {
    /// Returns the full releases list, most recent first (API ordering).
    async fn fetch_releases(&self) -> Result<Vec<ReleaseData>, UpdateError>;
}

/// Fetches releases for a fixed owner/repo pair from the GitHub API.
pub struct GitHubProvider {
    owner: String,
    repo: String,
    api_base: String,
    token: Option<String>,
}

impl GitHubProvider {
    pub fn new(owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            api_base: GITHUB_API_URL.to_string(),
            token: None,
        }
    }

    /// Points the provider at a different API host, used by tests to talk
    /// to a local mock server.
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Attaches a bearer token for private repositories and higher rate
    /// limits.
    pub fn with_token(mut self, token: &str) -> Self {
        if !token.trim().is_empty() {
            self.token = Some(token.to_string());
        }
        self
    }

    fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.api_base, self.owner, self.repo
        )
    }

    fn request_headers(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("Accept".to_string(), ACCEPT_HEADER.to_string());
        map.insert("User-Agent".to_string(), USER_AGENT.to_string());
        if let Some(token) = &self.token {
            map.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        map
    }
}

#[async_trait]
impl ReleaseProvider for GitHubProvider {
    async fn fetch_releases(&self) -> Result<Vec<ReleaseData>, UpdateError> {
        let url = self.releases_url();
        let uri: Uri = url.parse().map_err(|_| UpdateError::InvalidUrl)?;
        debug!("fetching releases from {}", url);

        let rsp = get(uri, &self.request_headers(), REQUEST_TIMEOUT)
            .await
            .map_err(|e| UpdateError::Network(e.to_string()))?;
        if rsp.status != 200 {
            return Err(UpdateError::Network(format!(
                "server returned status {}",
                rsp.status
            )));
        }

        serde_json::from_slice(&rsp.body).map_err(|e| UpdateError::Parse(e.to_string()))
    }
}
