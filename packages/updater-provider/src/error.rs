use std::fmt;

/// Everything that can go wrong during a check or download cycle. All
/// variants are surfaced to the caller as a message string; none abort
/// the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    /// The releases API URL failed to parse. Unreachable with the fixed
    /// constant, but guarded anyway.
    InvalidUrl,
    /// Transport failure or a non-200 response.
    Network(String),
    /// The response body was not a valid releases list.
    Parse(String),
    /// No published, non-draft release with an IPA asset exists.
    NoRelease,
    /// Download requested before a successful check.
    NoDownloadUrl,
    /// The host environment refused to open the download URL.
    CannotOpen(String),
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::InvalidUrl => write!(f, "invalid releases API URL"),
            UpdateError::Network(msg) => write!(f, "network error: {}", msg),
            UpdateError::Parse(msg) => write!(f, "failed to decode releases: {}", msg),
            UpdateError::NoRelease => write!(f, "no installable release found"),
            UpdateError::NoDownloadUrl => {
                write!(f, "no download URL available; check for updates first")
            }
            UpdateError::CannotOpen(msg) => write!(f, "cannot open download URL: {}", msg),
        }
    }
}

impl std::error::Error for UpdateError {}
