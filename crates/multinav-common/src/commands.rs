use serde::{Deserialize, Serialize};

/// Operator-selected input delivery mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Broadcast text goes to the configured target set; pane mirroring is off.
    #[default]
    Control,
    /// Broadcast text goes only to the leader pane; pane mirroring may relay.
    Mirror,
    /// Broadcast text is dropped; pane mirroring may relay.
    None,
}

/// Every command the control panel can issue.
///
/// On the wire a command is `{"kind": "<name>", "payload": {...}}`, the same
/// envelope the webview IPC bridge uses for all messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum ControlCommand {
    NavigateAll { url: String },
    NavigateOne { index: i64, url: String },
    ReloadAll,
    SetViewCount { count: i64 },
    SetMirrorSource { index: i64 },
    SetMirrorEnabled { enabled: bool },
    SetInputMode { mode: InputMode },
    SetLeader { index: Option<usize> },
    SetSprayAll { enabled: bool },
    SendText { text: String },
    SendKey { key: String },
    SetZoom { factor: f64 },
    /// Announces the prompt about to be typed, for log grouping.
    Prompt { text: String },
}

impl ControlCommand {
    /// Wire name, used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            ControlCommand::NavigateAll { .. } => "navigateAll",
            ControlCommand::NavigateOne { .. } => "navigateOne",
            ControlCommand::ReloadAll => "reloadAll",
            ControlCommand::SetViewCount { .. } => "setViewCount",
            ControlCommand::SetMirrorSource { .. } => "setMirrorSource",
            ControlCommand::SetMirrorEnabled { .. } => "setMirrorEnabled",
            ControlCommand::SetInputMode { .. } => "setInputMode",
            ControlCommand::SetLeader { .. } => "setLeader",
            ControlCommand::SetSprayAll { .. } => "setSprayAll",
            ControlCommand::SendText { .. } => "sendText",
            ControlCommand::SendKey { .. } => "sendKey",
            ControlCommand::SetZoom { .. } => "setZoom",
            ControlCommand::Prompt { .. } => "prompt",
        }
    }

    /// Parse a raw IPC body into a command.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
