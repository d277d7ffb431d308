//! Layout calculation: window size to control and pane rects.

use multinav_common::types::{Rect, Size, MAX_PANES};

use super::{Layout, LayoutEngine, PaneCount};

impl LayoutEngine {
    /// Compute the control rect and one rect per pane slot.
    ///
    /// Integer splits hand the leftover pixel to the right column and the
    /// bottom row, so the visible rects always tile the grid exactly. In
    /// three-pane mode the fourth slot gets a 1×1 rect just right of the grid.
    pub fn compute(&self, window: Size, count: PaneCount) -> Layout {
        let control = Rect::new(0, 0, self.control_width, window.height);

        let gx = self.control_width as i32;
        let gw = window.width.saturating_sub(self.control_width);
        let gh = window.height;
        let grid = Rect::new(gx, 0, gw, gh);

        let mut panes = [Rect::default(); MAX_PANES];
        match count {
            PaneCount::Four => {
                let cw = gw / 2;
                let ch = gh / 2;
                panes[0] = Rect::new(gx, 0, cw, ch);
                panes[1] = Rect::new(gx + cw as i32, 0, gw - cw, ch);
                panes[2] = Rect::new(gx, ch as i32, cw, gh - ch);
                panes[3] = Rect::new(gx + cw as i32, ch as i32, gw - cw, gh - ch);
            }
            PaneCount::Three => {
                let ch = gh / 3;
                panes[0] = Rect::new(gx, 0, gw, ch);
                panes[1] = Rect::new(gx, ch as i32, gw, ch);
                panes[2] = Rect::new(gx, (ch * 2) as i32, gw, gh - ch * 2);
                panes[3] = hidden_rect(gx, gw);
            }
        }

        Layout {
            control,
            grid,
            panes,
            count,
        }
    }
}

/// Degenerate placement for a slot that is not part of the visible grid.
pub fn hidden_rect(grid_x: i32, grid_width: u32) -> Rect {
    Rect::new(grid_x + grid_width as i32, 0, 1, 1)
}
