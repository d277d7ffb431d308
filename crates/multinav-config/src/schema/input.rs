//! Input routing and mirroring configuration types.

use multinav_common::InputMode;
use serde::{Deserialize, Serialize};

/// Startup state of the broadcast router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mode: InputMode,
    /// In control mode, send broadcast text to every pane.
    pub spray_all: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::Control,
            spray_all: true,
        }
    }
}

/// Startup state of pane-to-pane mirroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    pub enabled: bool,
    /// Pane whose raw input is relayed (valid range: 0-3).
    pub source: u32,
    /// Outline colour drawn around the source pane.
    pub highlight_color: String,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            source: 0,
            highlight_color: "#2a60e8".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults() {
        let config = InputConfig::default();
        assert_eq!(config.mode, InputMode::Control);
        assert!(config.spray_all);
    }

    #[test]
    fn mirror_defaults() {
        let config = MirrorConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.source, 0);
        assert_eq!(config.highlight_color, "#2a60e8");
    }

    #[test]
    fn mode_parses_lowercase() {
        let config: InputConfig = toml::from_str(r#"mode = "mirror""#).unwrap();
        assert_eq!(config.mode, InputMode::Mirror);
        assert!(config.spray_all);
        assert!(toml::from_str::<InputConfig>(r#"mode = "Mirror""#).is_err());
    }
}
