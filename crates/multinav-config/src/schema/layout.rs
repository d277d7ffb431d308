//! Layout and pane content configuration types.

use serde::{Deserialize, Serialize};

/// Grid geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the control panel on the left (valid range: 200-800).
    pub control_width: u32,
    /// Visible panes at startup, 3 or 4.
    pub pane_count: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            control_width: 380,
            pane_count: 4,
        }
    }
}

/// What the content panes show at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanesConfig {
    /// One URL per pane, in pane order. Missing entries open `about:blank`.
    pub initial_urls: Vec<String>,
    /// Page background injected into every pane.
    pub background_css: String,
    /// Shared zoom factor (valid range: 0.25-3.0).
    pub zoom: f64,
}

impl Default for PanesConfig {
    fn default() -> Self {
        Self {
            initial_urls: vec![
                "https://example.com".into(),
                "https://example.org".into(),
                "https://example.net".into(),
                "https://www.wikipedia.org".into(),
            ],
            background_css: "#1b1d23".into(),
            zoom: 1.0,
        }
    }
}

impl PanesConfig {
    /// Startup URL for `pane`.
    pub fn url_for(&self, pane: usize) -> &str {
        self.initial_urls
            .get(pane)
            .map(String::as_str)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or("about:blank")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.control_width, 380);
        assert_eq!(config.pane_count, 4);
    }

    #[test]
    fn panes_defaults() {
        let config = PanesConfig::default();
        assert_eq!(config.initial_urls.len(), 4);
        assert_eq!(config.url_for(3), "https://www.wikipedia.org");
        assert_eq!(config.background_css, "#1b1d23");
        assert!((config.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn short_url_list_pads_with_blank() {
        let config: PanesConfig = toml::from_str(r#"initial_urls = ["https://a.test", ""]"#).unwrap();
        assert_eq!(config.url_for(0), "https://a.test");
        assert_eq!(config.url_for(1), "about:blank");
        assert_eq!(config.url_for(3), "about:blank");
    }
}
