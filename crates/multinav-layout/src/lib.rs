//! Pane bookkeeping and grid layout for the fixed set of content panes.

pub mod engine;
pub mod pane;
pub mod registry;

pub use engine::{Layout, LayoutEngine, PaneCount};
pub use pane::Pane;
pub use registry::PaneRegistry;
