//! The record posted to the ingest server.

use chrono::{DateTime, SecondsFormat, Utc};
use multinav_common::new_id;
use multinav_common::types::PaneIndex;
use serde::{Deserialize, Serialize};

use crate::observations::Observations;
use crate::observer::ContentPayload;
use crate::prompt::PromptTracker;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub text: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskContext {
    pub topic: String,
    pub intent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub surface: String,
    pub pane_id: String,
    pub browser: String,
    pub os: String,
    pub device: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub provider: String,
    pub name: String,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseInfo {
    pub text: String,
    pub raw_tokens: Option<u64>,
    pub latency_ms: Option<u64>,
    pub finish_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub event_id: String,
    pub session_id: String,
    pub ts: String,
    pub user_input: UserInput,
    pub task_context: TaskContext,
    pub client: ClientInfo,
    pub model: ModelInfo,
    pub response: ResponseInfo,
    pub observations: Observations,
    pub costing: serde_json::Map<String, serde_json::Value>,
}

impl LogEvent {
    /// Build a record for content observed in `pane`, stamped at `now`.
    ///
    /// Latency comes from the payload when reported, otherwise from the time
    /// since the last prompt.
    pub fn from_content(
        pane: PaneIndex,
        payload: &ContentPayload,
        prompt: &PromptTracker,
        now: DateTime<Utc>,
    ) -> Self {
        let ts = payload
            .detected_at
            .clone()
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true));
        let latency_ms = payload.latency_ms.or_else(|| prompt.elapsed_ms(now));

        Self {
            event_id: new_id(),
            session_id: prompt.session().to_string(),
            ts,
            user_input: UserInput {
                text: prompt.text().to_string(),
                tags: vec!["multinav".into()],
            },
            task_context: TaskContext {
                topic: "ad-hoc".into(),
                intent: "compare".into(),
            },
            client: ClientInfo {
                surface: "multinav-app".into(),
                pane_id: pane.to_string(),
                browser: "webview".into(),
                os: std::env::consts::OS.into(),
                device: "desktop".into(),
            },
            model: ModelInfo {
                provider: payload.provider.clone(),
                name: payload
                    .model
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "unknown".into()),
                mode: "chat".into(),
            },
            response: ResponseInfo {
                text: payload.text.clone(),
                raw_tokens: payload.tokens_out,
                latency_ms,
                finish_reason: "stop".into(),
            },
            observations: Observations::detect(&payload.text),
            costing: serde_json::Map::new(),
        }
    }
}
