pub mod checker;
pub mod observer;
pub mod opener;
pub mod state;

pub use checker::UpdateChecker;
pub use observer::{ObserverManager, UpdateObserver};
pub use opener::{SystemUrlOpener, UrlOpener};
pub use state::CheckState;

pub use updater_provider::{
    AssetData, GitHubProvider, ReleaseData, ReleaseProvider, UpdateError,
};
