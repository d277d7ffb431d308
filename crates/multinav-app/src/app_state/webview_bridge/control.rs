//! Keeps the control panel's widgets in step with session state.

use multinav_webview::ipc::STATE_KIND;
use multinav_webview::PanelState;

use crate::app_state::core::MultinavApp;

impl MultinavApp {
    pub(in crate::app_state) fn panel_state(&self) -> PanelState {
        let router = self.session.router();
        let mirror = router.mirror();
        PanelState {
            mode: router.mode(),
            leader: router.leader(),
            spray_all: router.spray_all(),
            mirror_enabled: mirror.enabled,
            mirror_source: mirror.source(),
            pane_count: self.session.pane_count().get(),
            zoom: self.session.zoom(),
        }
    }

    /// Push session state to the control panel and refresh the title.
    pub(in crate::app_state) fn sync_control_panel(&self) {
        if let Some(registry) = &self.webviews {
            match serde_json::to_value(self.panel_state()) {
                Ok(payload) => registry.send_to_control(STATE_KIND, &payload),
                Err(e) => tracing::warn!(error = %e, "failed to encode panel state"),
            }
        }
        self.update_window_title();
    }
}
