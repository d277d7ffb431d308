//! Fixed-slot pane registry and its bounds table.

use multinav_common::types::{PaneIndex, Rect};
use tracing::debug;

use crate::engine::Layout;
use crate::pane::Pane;

/// Ordered collection of content panes, allocated once at startup.
#[derive(Debug, Clone)]
pub struct PaneRegistry {
    panes: Vec<Pane>,
}

impl PaneRegistry {
    /// Allocate `count` panes with indices `0..count`.
    pub fn create(count: usize) -> Self {
        Self {
            panes: (0..count).map(|i| Pane::new(PaneIndex(i))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.panes.len()
    }

    /// All pane indices in order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.panes.iter().map(|p| p.index.get())
    }

    pub fn get(&self, index: usize) -> Option<&Pane> {
        self.panes.get(index)
    }

    /// Store bounds for a pane. Out-of-range indices are ignored.
    pub fn set_bounds(&mut self, index: usize, rect: Rect) {
        match self.panes.get_mut(index) {
            Some(pane) => pane.bounds = Some(rect),
            None => debug!(index, "set_bounds ignored: no such pane"),
        }
    }

    /// Last stored bounds, or `None` if the pane was never laid out.
    pub fn bounds(&self, index: usize) -> Option<Rect> {
        self.panes.get(index).and_then(|p| p.bounds)
    }

    /// Store every slot's rect from a layout pass. Hidden slots keep their
    /// degenerate rect so lookups never see an unset pane.
    pub fn apply_layout(&mut self, layout: &Layout) {
        for (i, rect) in layout.panes.iter().enumerate() {
            self.set_bounds(i, *rect);
        }
    }
}
