//! Coordinate conversion between layout rects and wry rects.

use multinav_common::types::Rect;

/// Convert a layout `Rect` (integer logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            f64::from(rect.x),
            f64::from(rect.y),
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            f64::from(rect.width),
            f64::from(rect.height),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_rect_converts_to_wry_rect() {
        let wry_rect = rect_to_wry(Rect::new(380, 500, 650, 500));

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 380.0).abs() < f64::EPSILON);
                assert!((pos.y - 500.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 650.0).abs() < f64::EPSILON);
                assert!((size.height - 500.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn hidden_pane_rect_stays_one_pixel() {
        let wry_rect = rect_to_wry(Rect::new(1680, 0, 1, 1));
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1.0).abs() < f64::EPSILON);
                assert!((size.height - 1.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
