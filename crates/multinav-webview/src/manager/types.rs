use crate::content::CONTROL_URL;
use crate::scripts::{background_script, PANE_CAPTURE_SCRIPT};

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Extra scripts run on every page load, after the IPC bridge.
    pub init_scripts: Vec<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            devtools: cfg!(debug_assertions),
            init_scripts: Vec::new(),
        }
    }
}

impl WebViewConfig {
    /// Config for the control panel.
    pub fn control() -> Self {
        Self {
            url: CONTROL_URL.to_string(),
            ..Default::default()
        }
    }

    /// Config for a content pane: input capture plus the background paint.
    pub fn pane(url: impl Into<String>, background: &str) -> Self {
        Self {
            url: url.into(),
            init_scripts: vec![PANE_CAPTURE_SCRIPT.to_string(), background_script(background)],
            ..Default::default()
        }
    }

    pub fn with_devtools(mut self, devtools: bool) -> Self {
        self.devtools = devtools;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_loads_bundled_panel_without_capture() {
        let config = WebViewConfig::control();
        assert_eq!(config.url, CONTROL_URL);
        assert!(config.init_scripts.is_empty());
    }

    #[test]
    fn pane_installs_capture_then_background() {
        let config = WebViewConfig::pane("https://example.com", "#1b1d23");
        assert_eq!(config.url, "https://example.com");
        assert_eq!(config.init_scripts.len(), 2);
        assert_eq!(config.init_scripts[0], PANE_CAPTURE_SCRIPT);
        assert!(config.init_scripts[1].contains("#1b1d23"));
    }

    #[test]
    fn devtools_override() {
        assert!(WebViewConfig::control().with_devtools(true).devtools);
        assert!(!WebViewConfig::control().with_devtools(false).devtools);
    }
}
