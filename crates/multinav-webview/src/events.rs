//! WebView event types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which WebView an event came from.
///
/// The pane index is fixed when the WebView is built, so anything a page
/// posts is attributed by the view that delivered it, never by its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Control,
    Pane(usize),
}

impl ViewId {
    pub fn pane(self) -> Option<usize> {
        match self {
            ViewId::Pane(index) => Some(index),
            ViewId::Control => None,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewId::Control => f.write_str("control"),
            ViewId::Pane(index) => write!(f, "pane-{index}"),
        }
    }
}

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        view: ViewId,
        state: PageLoadState,
        url: String,
    },
    /// An IPC message was received from JavaScript.
    IpcMessage { view: ViewId, body: String },
    /// A navigation passed the allowlist.
    NavigationRequested { view: ViewId, url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_id_display() {
        assert_eq!(ViewId::Control.to_string(), "control");
        assert_eq!(ViewId::Pane(2).to_string(), "pane-2");
    }

    #[test]
    fn view_id_pane_index() {
        assert_eq!(ViewId::Pane(3).pane(), Some(3));
        assert_eq!(ViewId::Control.pane(), None);
    }
}
