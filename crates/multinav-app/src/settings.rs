//! Startup settings: config file, CLI overrides, and the session defaults
//! derived from them.

use multinav_common::ConfigError;
use multinav_config::MultinavConfig;
use multinav_layout::PaneCount;
use multinav_router::SessionDefaults;

use crate::cli::Args;

/// Load the config named on the command line (or the default one) and
/// apply CLI overrides. A load failure falls back to defaults and is
/// returned for reporting.
pub fn load(args: &Args) -> (MultinavConfig, Option<ConfigError>) {
    let loaded = match &args.config {
        Some(path) => multinav_config::load_config_from(path),
        None => multinav_config::load_config(),
    };
    let (mut config, error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (MultinavConfig::default(), Some(e)),
    };
    apply_overrides(&mut config, args);
    (config, error)
}

fn apply_overrides(config: &mut MultinavConfig, args: &Args) {
    if let Some(panes) = args.panes {
        config.layout.pane_count = panes;
    }
    if args.no_ingest {
        config.ingest.enabled = false;
    }
}

/// Session startup state from config.
pub fn session_defaults(config: &MultinavConfig) -> SessionDefaults {
    SessionDefaults {
        control_width: config.layout.control_width,
        pane_count: PaneCount::from_requested(i64::from(config.layout.pane_count)),
        mode: config.input.mode,
        spray_all: config.input.spray_all,
        mirror_enabled: config.mirror.enabled,
        mirror_source: i64::from(config.mirror.source),
        zoom: config.panes.zoom,
        highlight_color: config.mirror.highlight_color.clone(),
    }
}
