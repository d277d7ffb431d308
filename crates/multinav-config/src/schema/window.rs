//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Main window size and appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Window background shown behind the webviews.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "multinav".into(),
            width: 1680,
            height: 1000,
            min_width: 1200,
            min_height: 800,
            background: "#111318".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
