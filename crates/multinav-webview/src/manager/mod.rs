//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry::WebView` instances for the control panel
//! and the content panes and owns the event queue their handlers feed.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Builds WebViews and collects their events.
pub struct WebViewManager {
    /// Event sink. Handlers push here; the main event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Assets served over the `multinav://` custom protocol.
    content_provider: Arc<ContentProvider>,
}

impl WebViewManager {
    /// A manager serving the bundled control panel.
    pub fn new() -> Self {
        Self::with_content_provider(ContentProvider::bundled())
    }

    pub fn with_content_provider(provider: ContentProvider) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: Arc::new(provider),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ViewId;

    #[test]
    fn drain_empties_the_queue() {
        let manager = WebViewManager::new();
        manager.events.lock().unwrap().push(WebViewEvent::IpcMessage {
            view: ViewId::Pane(0),
            body: r#"{"kind":"hello"}"#.into(),
        });
        assert_eq!(manager.drain_events().len(), 1);
        assert!(manager.drain_events().is_empty());
    }
}
