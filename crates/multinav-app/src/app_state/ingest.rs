//! Content reports from panes and prompt bookkeeping for log shipping.

use chrono::Utc;

use multinav_common::PaneIndex;
use multinav_ingest::{ContentPayload, LogEvent};

use super::core::MultinavApp;

impl MultinavApp {
    /// Remember the prompt the control panel is about to type.
    pub(super) fn record_prompt(&mut self, text: &str) {
        self.prompt.record(text);
        tracing::debug!(
            session_id = %self.prompt.session(),
            chars = text.chars().count(),
            "prompt recorded"
        );
    }

    /// Turn a content report into a log record, unless it repeats the last
    /// report from the same pane.
    pub(super) fn observe_content(
        &mut self,
        pane: usize,
        payload: &ContentPayload,
    ) -> Option<LogEvent> {
        if !self.observer.accept(pane, payload) {
            return None;
        }
        let pane = PaneIndex::checked(pane)?;
        Some(LogEvent::from_content(pane, payload, &self.prompt, Utc::now()))
    }

    /// Observe a content report and ship the record in the background.
    pub(super) fn handle_content(&mut self, pane: usize, payload: &ContentPayload) {
        let Some(event) = self.observe_content(pane, payload) else {
            tracing::trace!(pane, "content unchanged or empty, not logged");
            return;
        };
        match (&self.sink, &self.tokio_runtime) {
            (Some(sink), Some(rt)) => {
                sink.ship(rt.handle(), event);
            }
            _ => tracing::debug!(
                pane,
                provider = %payload.provider,
                "log shipping off, content dropped"
            ),
        }
    }
}
