//! Graceful shutdown: destroy webviews, drain pending log deliveries.

use super::core::MultinavApp;
use super::types::SHUTDOWN_TIMEOUT;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl MultinavApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Webviews go first so no new content reports arrive; the runtime then
    /// gets a bounded window to finish in-flight POSTs.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        self.webviews = None;

        self.sink = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(SHUTDOWN_TIMEOUT);
        }

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
