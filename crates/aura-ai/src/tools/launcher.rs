//! Where opened URLs go.

use aura_common::PlatformError;
use tracing::info;

/// Dispatches a URL to the host environment, fire-and-forget.
///
/// `Ok` means the request was handed off, not that the page loaded.
pub trait UrlLauncher: Send + Sync {
    fn launch(&self, url: &str) -> Result<(), PlatformError>;
}

/// Opens URLs in the system browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlLauncher for SystemBrowser {
    fn launch(&self, url: &str) -> Result<(), PlatformError> {
        aura_platform::open_url(url)
    }
}

/// Records the URL in the log instead of opening it (headless hosts).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlyLauncher;

impl UrlLauncher for LogOnlyLauncher {
    fn launch(&self, url: &str) -> Result<(), PlatformError> {
        info!(url, "browser launch disabled, not opening");
        Ok(())
    }
}
