use multinav_common::types::{PaneIndex, Rect};

/// One fixed content slot. Created at startup, never destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    pub index: PaneIndex,
    /// Last bounds applied by the layout engine; `None` until the first layout.
    pub bounds: Option<Rect>,
}

impl Pane {
    pub fn new(index: PaneIndex) -> Self {
        Self {
            index,
            bounds: None,
        }
    }
}
