//! Toolbar/page split geometry and wry coordinate conversion.

use lantern_common::Rect;

/// Split the window viewport into the toolbar strip and the page area.
///
/// The toolbar spans the full width at the top; the page surface takes
/// whatever height remains. A window shorter than the toolbar clamps
/// the page to zero height rather than going negative.
pub fn split_viewport(width: f64, height: f64, toolbar_height: f64) -> (Rect, Rect) {
    let toolbar_height = toolbar_height.min(height);
    let toolbar = Rect {
        x: 0.0,
        y: 0.0,
        width,
        height: toolbar_height,
    };
    let page = Rect {
        x: 0.0,
        y: toolbar_height,
        width,
        height: (height - toolbar_height).max(0.0),
    };
    (toolbar, page)
}

/// Convert a logical `Rect` to a wry `Rect`.
pub fn to_wry_rect(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_covers_the_viewport_without_overlap() {
        let (toolbar, page) = split_viewport(1024.0, 768.0, 44.0);

        assert_eq!(toolbar.y, 0.0);
        assert_eq!(toolbar.height, 44.0);
        assert_eq!(toolbar.width, 1024.0);

        assert_eq!(page.y, 44.0);
        assert_eq!(page.height, 724.0);
        assert_eq!(page.width, 1024.0);

        assert_eq!(toolbar.height + page.height, 768.0);
    }

    #[test]
    fn tiny_window_clamps_instead_of_going_negative() {
        let (toolbar, page) = split_viewport(300.0, 30.0, 44.0);
        assert_eq!(toolbar.height, 30.0);
        assert_eq!(page.height, 0.0);
        assert_eq!(page.y, 30.0);
    }

    #[test]
    fn logical_rect_converts_to_wry_rect() {
        let rect = Rect {
            x: 0.0,
            y: 44.0,
            width: 1024.0,
            height: 724.0,
        };
        let wry_rect = to_wry_rect(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x).abs() < f64::EPSILON);
                assert!((pos.y - 44.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1024.0).abs() < f64::EPSILON);
                assert!((size.height - 724.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected logical size"),
        }
    }
}
