//! Configuration schema types for multinav.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the built-in startup defaults.

mod input;
mod layout;
mod system;
mod window;

pub use input::*;
pub use layout::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Read once at startup. Runtime changes made from the control panel are
/// never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MultinavConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub panes: PanesConfig,
    pub input: InputConfig,
    pub mirror: MirrorConfig,
    pub ingest: IngestConfig,
    pub logging: LoggingConfig,
    pub advanced: AdvancedConfig,
}

// =============================================================================
// Tests
// =============================================================================
