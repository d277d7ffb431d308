//! Layout engine types and configuration.

use multinav_common::types::{Rect, MAX_PANES};
use serde::{Deserialize, Serialize};

/// Default width of the control panel strip on the left edge.
pub const DEFAULT_CONTROL_WIDTH: u32 = 380;

/// Number of visible content panes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaneCount {
    Three,
    #[default]
    Four,
}

impl PaneCount {
    /// Map a requested count onto a supported one: 3 selects three panes,
    /// anything else selects four.
    pub fn from_requested(count: i64) -> Self {
        if count == 3 {
            PaneCount::Three
        } else {
            PaneCount::Four
        }
    }

    pub fn get(self) -> usize {
        match self {
            PaneCount::Three => 3,
            PaneCount::Four => 4,
        }
    }
}

/// Computes pane and control-panel rectangles from the window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    /// Width in pixels reserved for the control panel.
    pub control_width: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            control_width: DEFAULT_CONTROL_WIDTH,
        }
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub control: Rect,
    /// Region right of the control panel that the visible panes tile.
    pub grid: Rect,
    /// One rect per pane slot, visible or not.
    pub panes: [Rect; MAX_PANES],
    pub count: PaneCount,
}

impl Layout {
    /// Rects of the panes that are part of the visible grid.
    pub fn visible(&self) -> &[Rect] {
        &self.panes[..self.count.get()]
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index < self.count.get()
    }
}
