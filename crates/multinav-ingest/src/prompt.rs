use chrono::{DateTime, Utc};
use multinav_common::SessionId;

/// Most recent prompt announced by the control panel.
///
/// Every announcement also starts a new log session, so responses can be
/// grouped by the prompt that produced them.
#[derive(Debug, Clone, Default)]
pub struct PromptTracker {
    text: String,
    at: Option<DateTime<Utc>>,
    session: SessionId,
}

impl PromptTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, text: &str) {
        self.record_at(text, Utc::now());
    }

    pub fn record_at(&mut self, text: &str, at: DateTime<Utc>) {
        self.text = text.to_string();
        self.at = Some(at);
        self.session = SessionId::at(at);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn at(&self) -> Option<DateTime<Utc>> {
        self.at
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Milliseconds from the last prompt to `now`, if a prompt was recorded
    /// and `now` is not earlier than it.
    pub fn elapsed_ms(&self, now: DateTime<Utc>) -> Option<u64> {
        let at = self.at?;
        u64::try_from((now - at).num_milliseconds()).ok()
    }
}
