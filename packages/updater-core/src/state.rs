use serde::{Deserialize, Serialize};

/// Snapshot of one check cycle. Reset at the start of each check, mutated
/// only by the checker, and handed out as a clone to observers and readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckState {
    pub is_loading: bool,
    pub update_available: bool,
    pub latest_version: Option<String>,
    pub latest_build: Option<u32>,
    pub download_url: Option<String>,
    pub error: Option<String>,
}
