//! Full configuration validation.
//!
//! Validates numeric ranges, colour formats and URLs. Each section has its
//! own submodule; this orchestrator calls them all and collects errors into
//! a single `ConfigError`.

mod helpers;
mod layout;
mod misc;


use crate::schema::MultinavConfig;
use multinav_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MultinavConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_window(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    layout::validate_panes(&mut errors, config);
    misc::validate_mirror(&mut errors, config);
    misc::validate_ingest(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
