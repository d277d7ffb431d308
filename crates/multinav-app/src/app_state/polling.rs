//! Polling of webview events and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use multinav_webview::{PageLoadState, ViewId, WebViewEvent};

use super::core::MultinavApp;
use super::types::POLL_INTERVAL;

impl MultinavApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Handle everything the webview callbacks queued since the last poll.
    pub(super) fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { view, body } => {
                    self.handle_ipc_message(view, &body);
                }
                WebViewEvent::PageLoad { view, state, .. } => {
                    if let Some(registry) = &self.webviews {
                        registry.on_page_load(view, state);
                    }
                    if view == ViewId::Control && state == PageLoadState::Finished {
                        self.sync_control_panel();
                    }
                }
                WebViewEvent::NavigationRequested { view, url } => {
                    tracing::trace!(view = %view, url = %url, "navigation");
                }
            }
        }
    }
}
