use wry::WebView;

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, evaluate JS, resize, etc.).
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Navigate to a URL.
    pub fn load_url(&self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)
    }

    /// Re-request the current document.
    pub fn reload(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script("window.location.reload();")
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Set zoom level.
    pub fn zoom(&self, scale: f64) -> Result<(), wry::Error> {
        self.webview.zoom(scale)
    }
}
