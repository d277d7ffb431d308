//! The seam between session logic and whatever actually renders panes.

use multinav_common::types::Rect;
use multinav_common::Result;

use crate::event::PaneInputEvent;

/// Operations the session needs from the pane host.
///
/// Every call addresses one pane and fails independently; callers log a
/// failure and carry on with the remaining panes.
pub trait PaneHost {
    fn load_url(&mut self, pane: usize, url: &str) -> Result<()>;

    fn reload(&mut self, pane: usize) -> Result<()>;

    fn set_bounds(&mut self, pane: usize, rect: Rect) -> Result<()>;

    fn set_control_bounds(&mut self, rect: Rect) -> Result<()>;

    fn set_zoom(&mut self, pane: usize, factor: f64) -> Result<()>;

    /// Inject a synthetic input event into a pane.
    fn send_input(&mut self, pane: usize, event: &PaneInputEvent) -> Result<()>;

    /// Draw or remove the source outline on a pane.
    fn set_source_highlight(&mut self, pane: usize, on: bool, color: &str) -> Result<()>;

    fn focus_control(&mut self) -> Result<()>;
}
