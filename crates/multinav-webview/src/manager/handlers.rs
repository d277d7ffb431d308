use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, ViewId, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// URL prefixes the control panel may navigate to.
///
/// - `multinav://` serves the bundled panel
/// - On Windows, WebView2 rewrites it to `http://multinav.localhost`
pub const CONTROL_NAV_PREFIXES: &[&str] = &[
    "multinav://",
    "http://multinav.localhost",
    "https://multinav.localhost",
    "about:blank",
];

/// URL prefixes a content pane may navigate to. Panes browse the open web
/// but never local files or script/data URLs.
pub const PANE_NAV_PREFIXES: &[&str] = &["https://", "http://", "about:blank"];

/// Check whether `view` may navigate to `url`.
pub fn is_navigation_allowed(view: ViewId, url: &str) -> bool {
    let prefixes = match view {
        ViewId::Control => CONTROL_NAV_PREFIXES,
        ViewId::Pane(_) => PANE_NAV_PREFIXES,
    };
    prefixes.iter().any(|prefix| url.starts_with(prefix))
}

fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    view = %view,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            push(&events, WebViewEvent::IpcMessage { view, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(view = %view, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { view, state, url });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(view, &url) {
                warn!(view = %view, url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }
            push(&events, WebViewEvent::NavigationRequested { view, url });
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
