use std::collections::HashMap;

use tracing::{debug, warn};
use wry::raw_window_handle;

use crate::events::{PageLoadState, ViewId, WebViewEvent};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Owns the control-panel WebView and the pane WebViews.
/// This is a higher-level convenience over `WebViewManager` for
/// managing the full lifecycle.
pub struct WebViewRegistry {
    manager: WebViewManager,
    control: Option<WebViewHandle>,
    panes: HashMap<usize, WebViewHandle>,
    /// Last outline script per pane, re-run after each page load since a
    /// navigation drops injected styles.
    pub(crate) highlights: HashMap<usize, String>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            control: None,
            panes: HashMap::new(),
            highlights: HashMap::new(),
        }
    }

    /// Create a WebView and register it under `view`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        view: ViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(view, window, bounds, config)?;
        match view {
            ViewId::Control => self.control = Some(handle),
            ViewId::Pane(index) => {
                self.panes.insert(index, handle);
            }
        }
        Ok(())
    }

    pub fn get(&self, view: ViewId) -> Option<&WebViewHandle> {
        match view {
            ViewId::Control => self.control.as_ref(),
            ViewId::Pane(index) => self.panes.get(&index),
        }
    }

    /// Drain all pending events from all WebViews.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Restore a pane's source outline once its new page is ready.
    pub fn on_page_load(&self, view: ViewId, state: PageLoadState) {
        if state != PageLoadState::Finished {
            return;
        }
        let Some(pane) = view.pane() else { return };
        if let (Some(handle), Some(script)) = (self.panes.get(&pane), self.highlights.get(&pane)) {
            if let Err(e) = handle.evaluate_script(script) {
                warn!(pane, error = %e, "failed to restore source outline");
            }
        }
    }

    /// Push a message to the control panel's JS handlers.
    pub fn send_to_control(&self, kind: &str, payload: &serde_json::Value) {
        let Some(control) = &self.control else {
            debug!(kind, "control panel not created, message dropped");
            return;
        };
        if let Err(e) = control.send_ipc(kind, payload) {
            warn!(kind, error = %e, "failed to message control panel");
        }
    }

    /// Drop every WebView. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        let count = self.count();
        self.panes.clear();
        self.control = None;
        self.highlights.clear();
        debug!(count, "all WebViews destroyed");
    }

    /// How many WebViews are alive, control panel included.
    pub fn count(&self) -> usize {
        self.panes.len() + usize::from(self.control.is_some())
    }
}
