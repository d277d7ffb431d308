mod calculation;
mod types;

pub use calculation::hidden_rect;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use multinav_common::types::{Rect, Size};

    fn engine() -> LayoutEngine {
        LayoutEngine { control_width: 380 }
    }

    /// Visible rects cover the grid exactly: areas sum to the grid area,
    /// nothing overlaps, and every rect sits inside the grid.
    fn assert_tiles(layout: &Layout) {
        let grid = layout.grid;
        let visible = layout.visible();
        let total: u64 = visible.iter().map(Rect::area).sum();
        assert_eq!(total, grid.area(), "areas must sum to grid area");

        for (i, a) in visible.iter().enumerate() {
            assert!(a.x >= grid.x && a.y >= grid.y, "rect {i} starts outside grid");
            assert!(a.right() <= grid.right(), "rect {i} past right edge");
            assert!(a.bottom() <= grid.bottom(), "rect {i} past bottom edge");
            for (j, b) in visible.iter().enumerate().skip(i + 1) {
                assert!(!a.overlaps(b), "rects {i} and {j} overlap");
            }
        }
    }

    #[test]
    fn control_rect_spans_full_height() {
        let layout = engine().compute(Size::new(1680, 1000), PaneCount::Four);
        assert_eq!(layout.control, Rect::new(0, 0, 380, 1000));
    }

    #[test]
    fn four_panes_even_grid() {
        let layout = engine().compute(Size::new(1680, 1000), PaneCount::Four);
        assert_eq!(layout.panes[0], Rect::new(380, 0, 650, 500));
        assert_eq!(layout.panes[1], Rect::new(1030, 0, 650, 500));
        assert_eq!(layout.panes[2], Rect::new(380, 500, 650, 500));
        assert_eq!(layout.panes[3], Rect::new(1030, 500, 650, 500));
        assert_tiles(&layout);
    }

    #[test]
    fn four_panes_odd_remainder_goes_right_and_bottom() {
        let layout = engine().compute(Size::new(1681, 1001), PaneCount::Four);
        assert_eq!(layout.panes[0], Rect::new(380, 0, 650, 500));
        assert_eq!(layout.panes[1], Rect::new(1030, 0, 651, 500));
        assert_eq!(layout.panes[2], Rect::new(380, 500, 650, 501));
        assert_eq!(layout.panes[3], Rect::new(1030, 500, 651, 501));
        assert_tiles(&layout);
    }

    #[test]
    fn three_panes_stack_with_last_row_remainder() {
        let layout = engine().compute(Size::new(1680, 1000), PaneCount::Three);
        assert_eq!(layout.panes[0], Rect::new(380, 0, 1300, 333));
        assert_eq!(layout.panes[1], Rect::new(380, 333, 1300, 333));
        assert_eq!(layout.panes[2], Rect::new(380, 666, 1300, 334));
        assert_tiles(&layout);
    }

    #[test]
    fn three_panes_hide_fourth_outside_grid() {
        let layout = engine().compute(Size::new(1680, 1000), PaneCount::Three);
        assert_eq!(layout.panes[3], Rect::new(1680, 0, 1, 1));
        assert!(!layout.is_visible(3));
        assert_eq!(layout.panes[3].x as i64, layout.grid.right());
    }

    #[test]
    fn window_narrower_than_control_floors_grid_at_zero() {
        let layout = engine().compute(Size::new(200, 600), PaneCount::Four);
        assert_eq!(layout.grid.width, 0);
        for r in layout.visible() {
            assert_eq!(r.width, 0);
        }
        assert_tiles(&layout);
    }

    #[test]
    fn tiles_exactly_across_many_sizes() {
        let engine = engine();
        for width in (0..=2000).step_by(37) {
            for height in (0..=1300).step_by(41) {
                for count in [PaneCount::Three, PaneCount::Four] {
                    let layout = engine.compute(Size::new(width, height), count);
                    assert_tiles(&layout);
                }
            }
        }
    }

    #[test]
    fn compute_is_idempotent() {
        let engine = engine();
        let size = Size::new(1443, 907);
        assert_eq!(
            engine.compute(size, PaneCount::Three),
            engine.compute(size, PaneCount::Three)
        );
        assert_eq!(
            engine.compute(size, PaneCount::Four),
            engine.compute(size, PaneCount::Four)
        );
    }

    #[test]
    fn pane_count_from_requested() {
        assert_eq!(PaneCount::from_requested(3), PaneCount::Three);
        assert_eq!(PaneCount::from_requested(4), PaneCount::Four);
        assert_eq!(PaneCount::from_requested(7), PaneCount::Four);
        assert_eq!(PaneCount::from_requested(-1), PaneCount::Four);
        assert_eq!(PaneCount::Three.get(), 3);
        assert_eq!(PaneCount::Four.get(), 4);
    }

    #[test]
    fn default_engine_uses_control_width_380() {
        assert_eq!(LayoutEngine::default().control_width, 380);
        assert_eq!(PaneCount::default(), PaneCount::Four);
    }
}
