//! WebView bridge for the control panel and the content panes.
//!
//! Wraps the `wry` crate to provide:
//! - One managed WebView for the control panel and one per content pane
//! - Bidirectional IPC (Rust <-> JavaScript) over a `{kind, payload}` envelope
//! - A `multinav://` custom protocol serving the bundled control panel
//! - Injected scripts: raw-input capture, synthetic input, source outline
//! - A [`PaneHost`](multinav_router::PaneHost) implementation over the registry

pub mod bounds;
pub mod content;
pub mod events;
mod host;
pub mod ipc;
pub mod manager;
pub mod scripts;

pub use bounds::rect_to_wry;
pub use content::{ContentProvider, CONTROL_URL};
pub use events::{PageLoadState, ViewId, WebViewEvent};
pub use ipc::{IpcMessage, PanelState};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
