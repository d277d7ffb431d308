//! Change detection for content reported by panes.

use multinav_common::types::MAX_PANES;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Body of a `content` message posted by a pane's content hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPayload {
    pub provider: String,
    #[serde(default)]
    pub model: Option<String>,
    pub text: String,
    #[serde(default)]
    pub tokens_out: Option<u64>,
    #[serde(default)]
    pub latency_ms: Option<u64>,
    #[serde(default)]
    pub detected_at: Option<String>,
}

/// Remembers the last accepted text per pane so each change is logged once.
#[derive(Debug, Default)]
pub struct ContentObserver {
    last: [Option<String>; MAX_PANES],
}

impl ContentObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `payload` is new content for `pane` and should be
    /// logged. Empty text, repeats and unknown panes are rejected.
    pub fn accept(&mut self, pane: usize, payload: &ContentPayload) -> bool {
        let Some(slot) = self.last.get_mut(pane) else {
            debug!(pane, "content from unknown pane dropped");
            return false;
        };
        if payload.text.trim().is_empty() {
            return false;
        }
        if slot.as_deref() == Some(payload.text.as_str()) {
            return false;
        }
        *slot = Some(payload.text.clone());
        true
    }

    /// Forget the last text for a pane, e.g. after it navigates away.
    pub fn reset(&mut self, pane: usize) {
        if let Some(slot) = self.last.get_mut(pane) {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(text: &str) -> ContentPayload {
        ContentPayload {
            provider: "example".into(),
            model: None,
            text: text.into(),
            tokens_out: None,
            latency_ms: None,
            detected_at: None,
        }
    }

    #[test]
    fn parses_hook_message() {
        let p: ContentPayload = serde_json::from_str(
            r#"{"provider":"chatgpt","model":"gpt-x","text":"hi","tokensOut":12,"latencyMs":340,"detectedAt":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(p.model.as_deref(), Some("gpt-x"));
        assert_eq!(p.tokens_out, Some(12));
        assert_eq!(p.latency_ms, Some(340));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let p: ContentPayload =
            serde_json::from_str(r#"{"provider":"x","text":"y","latencyMs":null}"#).unwrap();
        assert_eq!(p, payload_with_provider("x", "y"));
    }

    fn payload_with_provider(provider: &str, text: &str) -> ContentPayload {
        ContentPayload {
            provider: provider.into(),
            ..payload(text)
        }
    }

    #[test]
    fn emits_once_per_distinct_text() {
        let mut o = ContentObserver::new();
        assert!(o.accept(0, &payload("a")));
        assert!(!o.accept(0, &payload("a")));
        assert!(o.accept(0, &payload("ab")));
        assert!(o.accept(0, &payload("a")));
    }

    #[test]
    fn panes_are_tracked_separately() {
        let mut o = ContentObserver::new();
        assert!(o.accept(0, &payload("same")));
        assert!(o.accept(1, &payload("same")));
    }

    #[test]
    fn blank_text_and_unknown_panes_are_dropped() {
        let mut o = ContentObserver::new();
        assert!(!o.accept(0, &payload("   \n")));
        assert!(!o.accept(4, &payload("text")));
    }

    #[test]
    fn reset_allows_repeat() {
        let mut o = ContentObserver::new();
        assert!(o.accept(2, &payload("x")));
        o.reset(2);
        assert!(o.accept(2, &payload("x")));
    }
}
