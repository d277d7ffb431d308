//! Local content serving via custom protocol.
//!
//! Registers a `multinav://` custom protocol so the control panel loads its
//! bundled HTML/JS/CSS without a local HTTP server. The assets are compiled
//! into the binary.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

/// Scheme name registered on every WebView.
pub const PROTOCOL: &str = "multinav";

/// Entry point of the control panel.
pub const CONTROL_URL: &str = "multinav://localhost/control/index.html";

const CONTROL_HTML: &str = include_str!("../assets/control/index.html");
const CONTROL_JS: &str = include_str!("../assets/control/control.js");
const CONTROL_CSS: &str = include_str!("../assets/control/control.css");

/// Serves in-memory assets by path.
///
/// A request for `multinav://localhost/control/index.html` resolves the path
/// `control/index.html`.
pub struct ContentProvider {
    assets: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// An empty provider.
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
        }
    }

    /// A provider preloaded with the control panel.
    pub fn bundled() -> Self {
        let mut provider = Self::new();
        for (path, data) in [
            ("control/index.html", CONTROL_HTML),
            ("control/control.js", CONTROL_JS),
            ("control/control.css", CONTROL_CSS),
        ] {
            provider.add_asset(path, mime_from_extension(Path::new(path)), data);
        }
        provider
    }

    /// Register (or replace) an in-memory asset.
    pub fn add_asset(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.assets
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = clean.split(['?', '#']).next().unwrap_or(clean);
        let (mime, data) = self.assets.get(clean)?;
        Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for ContentProvider {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Strip the scheme and host from a custom-protocol request URI.
///
/// WebView2 on Windows rewrites `multinav://localhost/...` to
/// `http://multinav.localhost/...`, so both forms are accepted.
pub fn request_path(uri: &str) -> &str {
    [
        "multinav://localhost/",
        "multinav://localhost",
        "http://multinav.localhost/",
        "https://multinav.localhost/",
        "multinav:///",
        "multinav://",
    ]
    .iter()
    .find_map(|prefix| uri.strip_prefix(prefix))
    .unwrap_or("")
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_control_panel_resolves() {
        let cp = ContentProvider::bundled();
        assert_eq!(cp.len(), 3);

        let (mime, data) = cp.resolve("control/index.html").unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        let html = String::from_utf8_lossy(&data);
        assert!(html.contains("control.js"));
        assert!(html.contains("id=\"all-url\""));

        let (mime, _) = cp.resolve("/control/control.js").unwrap();
        assert_eq!(mime.as_ref(), "application/javascript");

        let (mime, _) = cp.resolve("control/control.css").unwrap();
        assert_eq!(mime.as_ref(), "text/css");
    }

    #[test]
    fn control_script_speaks_every_command() {
        let cp = ContentProvider::bundled();
        let (_, data) = cp.resolve("control/control.js").unwrap();
        let js = String::from_utf8_lossy(&data);
        for kind in crate::ipc::CONTROL_KINDS {
            assert!(js.contains(&format!("'{kind}'")), "control.js never sends {kind}");
        }
        assert!(js.contains(crate::ipc::FOCUS_URL_KIND));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let cp = ContentProvider::bundled();
        assert!(cp.resolve("control/index.html?v=2").is_some());
        assert!(cp.resolve("control/index.html#top").is_some());
    }

    #[test]
    fn unknown_paths_miss() {
        let cp = ContentProvider::bundled();
        assert!(cp.resolve("control/missing.html").is_none());
        assert!(cp.resolve("../Cargo.toml").is_none());
        assert!(cp.resolve("").is_none());
    }

    #[test]
    fn added_asset_overrides_bundled() {
        let mut cp = ContentProvider::bundled();
        cp.add_asset("control/index.html", "text/html", "<p>custom</p>");
        let (_, data) = cp.resolve("control/index.html").unwrap();
        assert_eq!(data.as_ref(), b"<p>custom</p>");
    }

    #[test]
    fn request_path_strips_scheme_forms() {
        assert_eq!(request_path(CONTROL_URL), "control/index.html");
        assert_eq!(
            request_path("http://multinav.localhost/control/control.js"),
            "control/control.js"
        );
        assert_eq!(request_path("multinav:///control/a.css"), "control/a.css");
        assert_eq!(request_path("https://example.com/x"), "");
    }

    #[test]
    fn mime_detection() {
        assert_eq!(mime_from_extension(Path::new("a.html")), "text/html");
        assert_eq!(mime_from_extension(Path::new("a.mjs")), "application/javascript");
        assert_eq!(mime_from_extension(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(mime_from_extension(Path::new("noext")), "application/octet-stream");
    }
}
