use multinav_common::types::PaneIndex;

/// Which pane's raw input is relayed, and whether relaying is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorSource {
    pub enabled: bool,
    source: PaneIndex,
}

impl Default for MirrorSource {
    fn default() -> Self {
        Self {
            enabled: false,
            source: PaneIndex(0),
        }
    }
}

impl MirrorSource {
    pub fn new(enabled: bool, source: i64) -> Self {
        Self {
            enabled,
            source: PaneIndex::clamped(source),
        }
    }

    pub fn source(&self) -> usize {
        self.source.get()
    }

    /// Set the source pane, clamping into range. Returns the stored index.
    pub fn set_source(&mut self, index: i64) -> usize {
        self.source = PaneIndex::clamped(index);
        self.source.get()
    }

    /// True when events from `origin` should be relayed.
    pub fn relays_from(&self, origin: usize) -> bool {
        self.enabled && origin == self.source.get()
    }
}
