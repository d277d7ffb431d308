//! Validation for the smaller sections: mirror and ingest.

use crate::schema::MultinavConfig;

use super::helpers::{validate_hex_color, validate_http_url, validate_range};

/// Validate mirror constraints.
pub(crate) fn validate_mirror(errors: &mut Vec<String>, config: &MultinavConfig) {
    validate_range(errors, "mirror.source", config.mirror.source, 0, 3);
    validate_hex_color(
        errors,
        "mirror.highlight_color",
        &config.mirror.highlight_color,
    );
}

/// Validate ingest constraints. The URL is only checked when shipping is on.
pub(crate) fn validate_ingest(errors: &mut Vec<String>, config: &MultinavConfig) {
    validate_range(
        errors,
        "ingest.timeout_ms",
        config.ingest.timeout_ms,
        100,
        60000,
    );
    if config.ingest.enabled {
        validate_http_url(errors, "ingest.url", &config.ingest.url);
    }
}
