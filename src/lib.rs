// Facade crate tying the updater workspace together

pub use updater_core::{
    CheckState, ObserverManager, SystemUrlOpener, UpdateChecker, UpdateObserver, UrlOpener,
};
pub use updater_provider::{
    AssetData, GitHubProvider, ReleaseData, ReleaseProvider, UpdateError, GITHUB_API_URL,
};
pub use updater_utils::versioning::{parse_tag, AppVersion, ParsedTag};
