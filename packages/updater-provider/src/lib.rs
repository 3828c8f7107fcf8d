pub mod data;
pub mod error;
pub mod github;

// Re-export common types
pub use data::{AssetData, ReleaseData};
pub use error::UpdateError;
pub use github::{GitHubProvider, ReleaseProvider, GITHUB_API_URL};
