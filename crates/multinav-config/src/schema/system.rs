//! System configuration types: log shipping, logging, and advanced settings.

use multinav_common::DEFAULT_INGEST_URL;
use serde::{Deserialize, Serialize};

/// Shipping of observed pane content to the ingest server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub enabled: bool,
    pub url: String,
    /// Per-request timeout in milliseconds (valid range: 100-60000).
    pub timeout_ms: u32,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_INGEST_URL.into(),
            timeout_ms: 5000,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl LoggingConfig {
    /// `tracing` filter directive covering every multinav crate.
    pub fn directive(&self) -> String {
        format!("multinav={}", self.level.as_str())
    }
}

/// Advanced configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[derive(Default)]
pub struct AdvancedConfig {
    /// Enable webview devtools.
    pub devtools: bool,
}

impl AdvancedConfig {
    /// Devtools are also forced on by `MULTINAV_DEBUG=1`.
    pub fn devtools_enabled(&self) -> bool {
        self.devtools || std::env::var("MULTINAV_DEBUG").is_ok_and(|v| v == "1")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_defaults() {
        let config = IngestConfig::default();
        assert!(config.enabled);
        assert_eq!(config.url, DEFAULT_INGEST_URL);
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn log_level_directive() {
        let config: LoggingConfig = toml::from_str(r#"level = "debug""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.directive(), "multinav=debug");
        assert_eq!(LoggingConfig::default().directive(), "multinav=info");
    }

    #[test]
    fn devtools_flag_from_config() {
        let config = AdvancedConfig { devtools: true };
        assert!(config.devtools_enabled());
    }
}
