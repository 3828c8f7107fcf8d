use updater_provider::UpdateError;

/// Hands a download URL off to the host environment. Injected into the
/// checker so tests and headless hosts can substitute their own.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), UpdateError>;
}

/// Opens URLs with the system browser. No response is awaited.
#[derive(Debug, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<(), UpdateError> {
        webbrowser::open(url).map_err(|e| UpdateError::CannotOpen(e.to_string()))
    }
}
