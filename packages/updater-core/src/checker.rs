use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::Mutex;

use updater_provider::{GitHubProvider, ReleaseData, ReleaseProvider, UpdateError};
use updater_utils::versioning::{parse_tag, AppVersion};

use crate::observer::{ObserverManager, UpdateObserver};
use crate::opener::{SystemUrlOpener, UrlOpener};
use crate::state::CheckState;

/// What a completed fetch-and-compare cycle produced.
struct CheckOutcome {
    update_available: bool,
    latest_version: String,
    latest_build: Option<u32>,
    download_url: String,
}

/// Checks a release feed for a newer IPA build than the one embedded at
/// construction time and publishes the result to observers.
///
/// At most one check runs at a time; calls made while a check is in
/// flight are rejected, not queued.
pub struct UpdateChecker {
    provider: Arc<dyn ReleaseProvider>,
    opener: Arc<dyn UrlOpener>,
    observers: ObserverManager,
    state: Mutex<CheckState>,
    current_version: String,
    current_build: String,
}

impl UpdateChecker {
    pub fn new(
        provider: Arc<dyn ReleaseProvider>,
        opener: Arc<dyn UrlOpener>,
        current_version: &str,
        current_build: &str,
    ) -> Self {
        Self {
            provider,
            opener,
            observers: ObserverManager::new(),
            state: Mutex::new(CheckState::default()),
            current_version: current_version.to_string(),
            current_build: current_build.to_string(),
        }
    }

    /// Checker wired to the GitHub API and the system browser.
    pub fn for_repo(owner: &str, repo: &str, current_version: &str, current_build: &str) -> Self {
        Self::new(
            Arc::new(GitHubProvider::new(owner, repo)),
            Arc::new(SystemUrlOpener),
            current_version,
            current_build,
        )
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    pub fn current_build(&self) -> &str {
        &self.current_build
    }

    /// Current snapshot; refreshed after every check cycle.
    pub async fn state(&self) -> CheckState {
        self.state.lock().await.clone()
    }

    pub async fn register_observer(&self, observer: Arc<dyn UpdateObserver>) {
        self.observers.register(observer).await;
    }

    /// Runs one full check cycle: fetch the releases list, pick the latest
    /// installable release, parse its tag and compare against the running
    /// version. Errors land in the published state, never in a panic, and
    /// `is_loading` is cleared on every exit path.
    pub async fn check_for_updates(&self) {
        {
            let mut state = self.state.lock().await;
            if state.is_loading {
                debug!("check already in flight, ignoring");
                return;
            }
            *state = CheckState {
                is_loading: true,
                ..CheckState::default()
            };
        }
        self.notify().await;

        let outcome = self.run_check().await;

        {
            let mut state = self.state.lock().await;
            match outcome {
                Ok(outcome) => {
                    state.update_available = outcome.update_available;
                    state.latest_version = Some(outcome.latest_version);
                    state.latest_build = outcome.latest_build;
                    state.download_url = Some(outcome.download_url);
                }
                Err(err) => {
                    warn!("update check failed: {}", err);
                    state.error = Some(err.to_string());
                }
            }
            state.is_loading = false;
        }
        self.notify().await;
    }

    async fn run_check(&self) -> Result<CheckOutcome, UpdateError> {
        let releases = self.provider.fetch_releases().await?;
        let latest = select_latest(&releases).ok_or(UpdateError::NoRelease)?;
        let ipa = latest.ipa_asset().ok_or(UpdateError::NoRelease)?;

        let parsed = parse_tag(&latest.tag_name, &self.current_version);
        let latest_build_string = parsed
            .build
            .map(|b| b.to_string())
            .unwrap_or_else(|| "0".to_string());

        // A tag that does not resolve to at least two numeric components
        // never signals an update; the download URL is still recorded.
        let update_available = match (
            AppVersion::parse(&parsed.version, &latest_build_string),
            AppVersion::parse(&self.current_version, &self.current_build),
        ) {
            (Some(latest_version), Some(current_version)) => latest_version > current_version,
            _ => false,
        };
        debug!(
            "latest tag {} resolves to version {} build {:?}, update_available={}",
            latest.tag_name, parsed.version, parsed.build, update_available
        );

        Ok(CheckOutcome {
            update_available,
            latest_version: parsed.version,
            latest_build: parsed.build,
            download_url: ipa.browser_download_url.clone(),
        })
    }

    /// Opens the download URL recorded by the last successful check.
    /// Fire-and-forget: no retry and no state mutation.
    pub async fn download_ipa(&self) -> Result<(), UpdateError> {
        let url = self.state.lock().await.download_url.clone();
        let url = url.ok_or(UpdateError::NoDownloadUrl)?;
        debug!("opening download URL {}", url);
        self.opener.open(&url)
    }

    async fn notify(&self) {
        let snapshot = self.state.lock().await.clone();
        self.observers.notify_state_changed(&snapshot).await;
    }
}

/// First non-draft release with a publication timestamp and an IPA asset.
/// The API returns releases most recent first, so no re-sorting is done.
fn select_latest(releases: &[ReleaseData]) -> Option<&ReleaseData> {
    releases
        .iter()
        .filter(|release| !release.draft && release.published_at.is_some())
        .find(|release| release.ipa_asset().is_some())
}
