//! multinav configuration.
//!
//! TOML-based configuration with validation. Every section has defaults,
//! so partial configs (or none at all) work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use multinav_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{} panes", config.layout.pane_count);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::MultinavConfig;

use multinav_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default `config.toml` if none exists.
pub fn load_config() -> Result<MultinavConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<MultinavConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
