//! Validation for window, layout, and pane settings.

use multinav_common::types::MAX_PANES;

use crate::schema::MultinavConfig;

use super::helpers::{validate_hex_color, validate_range, validate_range_f64};

/// Validate window constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &MultinavConfig) {
    let w = &config.window;
    validate_range(errors, "window.min_width", w.min_width, 400, 10000);
    validate_range(errors, "window.min_height", w.min_height, 300, 10000);
    if w.width < w.min_width {
        errors.push(format!(
            "window.width = {} is smaller than window.min_width = {}",
            w.width, w.min_width
        ));
    }
    if w.height < w.min_height {
        errors.push(format!(
            "window.height = {} is smaller than window.min_height = {}",
            w.height, w.min_height
        ));
    }
    validate_hex_color(errors, "window.background", &w.background);
}

/// Validate layout constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &MultinavConfig) {
    validate_range(
        errors,
        "layout.control_width",
        config.layout.control_width,
        200,
        800,
    );
    validate_range(errors, "layout.pane_count", config.layout.pane_count, 3, 4);
    if config.layout.control_width >= config.window.min_width {
        errors.push(format!(
            "layout.control_width = {} leaves no room for panes at window.min_width = {}",
            config.layout.control_width, config.window.min_width
        ));
    }
}

/// Validate pane content constraints.
pub(crate) fn validate_panes(errors: &mut Vec<String>, config: &MultinavConfig) {
    validate_range_f64(errors, "panes.zoom", config.panes.zoom, 0.25, 3.0);
    if config.panes.initial_urls.len() > MAX_PANES {
        errors.push(format!(
            "panes.initial_urls has {} entries, at most {MAX_PANES} allowed",
            config.panes.initial_urls.len()
        ));
    }
    validate_hex_color(errors, "panes.background_css", &config.panes.background_css);
}
