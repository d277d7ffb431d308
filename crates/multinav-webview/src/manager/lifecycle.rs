use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::{Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider, PROTOCOL};
use crate::events::ViewId;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view: ViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(true)
            .with_autoplay(true)
            .with_focused(view == ViewId::Control);

        // IPC bridge first; pane scripts build on window.multinav.ipc
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), view);
        builder = self.attach_custom_protocol(builder);

        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(view = %view, url = %config.url, "WebView created");

        Ok(WebViewHandle { webview })
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let cp = Arc::clone(&self.content_provider);
        builder.with_custom_protocol(PROTOCOL.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            asset_response(&cp, request_path(&uri))
        })
    }
}

/// Build the protocol response for one asset path.
fn asset_response(cp: &ContentProvider, path: &str) -> Response<Cow<'static, [u8]>> {
    match cp.resolve(path) {
        Some((mime, data)) => Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", mime.as_ref())
            .body(Cow::from(data.into_owned()))
            .unwrap_or_else(|_| not_found()),
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            not_found()
        }
    }
}

fn not_found() -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Borrowed(&b"Not Found"[..]));
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_bundled_asset_with_mime() {
        let cp = ContentProvider::bundled();
        let response = asset_response(&cp, "control/index.html");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "text/html");
        assert!(!response.body().is_empty());
    }

    #[test]
    fn missing_asset_is_404() {
        let cp = ContentProvider::bundled();
        let response = asset_response(&cp, "control/nope.js");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body().as_ref(), b"Not Found");
    }
}
