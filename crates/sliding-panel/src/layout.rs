//! Pure panel/top-view layout functions.
//!
//! These are called on load, on appear, and after every rotation; they are
//! idempotent and never touch any state. The caller applies the returned
//! rectangles to its views.

use geometry::{oriented_extent, Orientation, Rect, Size};

use crate::edge::Edge;

/// The panel's own resting frame for the current rotation.
///
/// The panel hugs its anchored edge at the configured thickness and spans
/// the full cross-axis dimension of the effective screen extent.
pub fn panel_frame(bounds: Rect, orientation: Orientation, size: Size, edge: Edge) -> Rect {
    let extent = oriented_extent(bounds, orientation);

    match edge {
        Edge::Right => Rect::new(extent.width - size.width, 0.0, size.width, extent.height),
        Edge::Left => Rect::new(0.0, 0.0, size.width, extent.height),
        Edge::Top => Rect::new(0.0, 0.0, extent.width, size.height),
        Edge::Bottom => Rect::new(0.0, extent.height - size.height, extent.width, size.height),
    }
}

/// The top view's resting frame for a shown or hidden panel.
///
/// Hidden leaves the top view at the screen origin along the sliding axis.
/// Shown in portrait displaces it by the panel thickness away from the
/// anchored edge so the panel is exposed; in landscape the top view stays
/// put and the panel is exposed without displacement. All fields other
/// than the sliding-axis coordinate pass through unchanged.
pub fn resting_top_view_frame(
    current: Rect,
    orientation: Orientation,
    visible: bool,
    size: Size,
    edge: Edge,
) -> Rect {
    let origin = if visible && orientation.is_portrait() {
        match edge {
            Edge::Right => -size.width,
            Edge::Left => size.width,
            Edge::Top => size.height,
            Edge::Bottom => -size.height,
        }
    } else {
        0.0
    };

    edge.with_origin(current, origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry::Orientation::{LandscapeLeft, LandscapeRight, Portrait, PortraitUpsideDown};

    const BOUNDS: Rect = Rect { x: 0.0, y: 0.0, width: 320.0, height: 480.0 };
    const PANEL: Size = Size { width: 80.0, height: 100.0 };

    #[test]
    fn test_panel_frame_right_portrait() {
        let frame = panel_frame(BOUNDS, Portrait, PANEL, Edge::Right);
        assert_eq!(frame, Rect::new(240.0, 0.0, 80.0, 480.0));
    }

    #[test]
    fn test_panel_frame_right_landscape() {
        // Landscape swaps the effective dimensions: 480 wide, 320 tall.
        let frame = panel_frame(BOUNDS, LandscapeLeft, PANEL, Edge::Right);
        assert_eq!(frame, Rect::new(400.0, 0.0, 80.0, 320.0));
    }

    #[test]
    fn test_panel_frame_other_edges() {
        assert_eq!(
            panel_frame(BOUNDS, Portrait, PANEL, Edge::Left),
            Rect::new(0.0, 0.0, 80.0, 480.0)
        );
        assert_eq!(
            panel_frame(BOUNDS, Portrait, PANEL, Edge::Top),
            Rect::new(0.0, 0.0, 320.0, 100.0)
        );
        assert_eq!(
            panel_frame(BOUNDS, Portrait, PANEL, Edge::Bottom),
            Rect::new(0.0, 380.0, 320.0, 100.0)
        );
    }

    #[test]
    fn test_panel_frame_width_invariant() {
        for orientation in [Portrait, PortraitUpsideDown, LandscapeLeft, LandscapeRight] {
            let frame = panel_frame(BOUNDS, orientation, PANEL, Edge::Right);
            let extent = geometry::oriented_extent(BOUNDS, orientation);
            assert_eq!(frame.width, PANEL.width);
            assert_eq!(frame.height, extent.height);
            assert!(frame.right() <= extent.width);
        }
    }

    #[test]
    fn test_resting_frame_hidden() {
        let current = Rect::new(-80.0, 0.0, 320.0, 480.0);
        for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
            let frame = resting_top_view_frame(current, Portrait, false, PANEL, edge);
            assert_eq!(edge.origin(frame), 0.0);
        }
    }

    #[test]
    fn test_resting_frame_visible_portrait() {
        let current = Rect::new(0.0, 0.0, 320.0, 480.0);
        let frame = resting_top_view_frame(current, Portrait, true, PANEL, Edge::Right);
        assert_eq!(frame, Rect::new(-80.0, 0.0, 320.0, 480.0));

        let frame = resting_top_view_frame(current, PortraitUpsideDown, true, PANEL, Edge::Left);
        assert_eq!(frame.x, 80.0);
        let frame = resting_top_view_frame(current, Portrait, true, PANEL, Edge::Top);
        assert_eq!(frame.y, 100.0);
        let frame = resting_top_view_frame(current, Portrait, true, PANEL, Edge::Bottom);
        assert_eq!(frame.y, -100.0);
    }

    #[test]
    fn test_resting_frame_visible_landscape() {
        let current = Rect::new(-80.0, 0.0, 480.0, 320.0);
        let frame = resting_top_view_frame(current, LandscapeRight, true, PANEL, Edge::Right);
        assert_eq!(frame.x, 0.0);
    }

    #[test]
    fn test_resting_frame_idempotent() {
        let current = Rect::new(17.0, 0.0, 320.0, 480.0);
        for visible in [true, false] {
            for orientation in [Portrait, LandscapeLeft] {
                let once = resting_top_view_frame(current, orientation, visible, PANEL, Edge::Right);
                let twice = resting_top_view_frame(once, orientation, visible, PANEL, Edge::Right);
                assert_eq!(once, twice);
            }
        }
    }
}
