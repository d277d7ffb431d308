//! IPC protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.ipc.postMessage(JSON.stringify({kind, payload}))`,
//!   which triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to invoke
//!   `window.multinav.ipc._dispatch(kind, payload)` in the WebView context.

use multinav_common::InputMode;
use serde::{Deserialize, Serialize};

/// Message kinds the control panel may send: every control command, plus
/// `shortcut` for key combos pressed while the panel has focus.
pub const CONTROL_KINDS: &[&str] = &[
    "navigateAll",
    "navigateOne",
    "reloadAll",
    "setViewCount",
    "setMirrorSource",
    "setMirrorEnabled",
    "setInputMode",
    "setLeader",
    "setSprayAll",
    "sendText",
    "sendKey",
    "setZoom",
    "prompt",
    "shortcut",
];

/// Message kinds a content pane may send.
pub const PANE_KINDS: &[&str] = &["hello", "input", "content"];

/// Kind pushed to the control panel to focus its URL field.
pub const FOCUS_URL_KIND: &str = "focusURL";

/// Kind pushed to the control panel to sync its widgets.
pub const STATE_KIND: &str = "state";

/// Snapshot of session state shown by the control panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub mode: InputMode,
    pub leader: Option<usize>,
    pub spray_all: bool,
    pub mirror_enabled: bool,
    pub mirror_source: usize,
    pub pane_count: usize,
    pub zoom: f64,
}

/// A typed IPC message from JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON, `null` when absent).
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// This is injected as an initialization script into every WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.multinav && window.multinav.ipc) { return; }
    window.multinav = window.multinav || {};
    window.multinav.ipc = {
        send: function(kind, payload) {
            var msg = { kind: kind };
            if (payload !== undefined) { msg.payload = payload; }
            window.ipc.postMessage(JSON.stringify(msg));
        },
        // Callbacks registered by JS code to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.multinav.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
