//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll for webview events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// How long in-flight log deliveries get to finish on exit.
pub(super) const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
