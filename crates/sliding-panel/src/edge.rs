//! Anchored screen edge

use serde::{Deserialize, Serialize};

use geometry::{Point, Rect, Size};

/// The screen edge a panel is anchored to.
///
/// Left/right panels slide horizontally, top/bottom panels vertically.
/// The original library modeled each edge as its own container subclass;
/// here a single set of geometry functions matches on this variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Does this panel slide along the horizontal axis?
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    /// Does this panel slide along the vertical axis?
    pub fn is_vertical(&self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }

    /// Panel thickness along the sliding axis
    pub fn thickness(&self, size: Size) -> f32 {
        if self.is_horizontal() {
            size.width
        } else {
            size.height
        }
    }

    /// A point's coordinate along the sliding axis
    pub fn along(&self, point: Point) -> f32 {
        if self.is_horizontal() {
            point.x
        } else {
            point.y
        }
    }

    /// A rectangle's origin coordinate along the sliding axis
    pub fn origin(&self, rect: Rect) -> f32 {
        if self.is_horizontal() {
            rect.x
        } else {
            rect.y
        }
    }

    /// A rectangle's extent along the sliding axis
    pub fn extent(&self, rect: Rect) -> f32 {
        if self.is_horizontal() {
            rect.width
        } else {
            rect.height
        }
    }

    /// Replace a rectangle's sliding-axis origin, leaving everything else
    pub fn with_origin(&self, rect: Rect, origin: f32) -> Rect {
        let mut frame = rect;
        if self.is_horizontal() {
            frame.x = origin;
        } else {
            frame.y = origin;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_predicates() {
        assert!(Edge::Left.is_horizontal());
        assert!(Edge::Right.is_horizontal());
        assert!(Edge::Top.is_vertical());
        assert!(Edge::Bottom.is_vertical());
        assert!(!Edge::Top.is_horizontal());
    }

    #[test]
    fn test_thickness_follows_axis() {
        let size = Size::new(80.0, 120.0);
        assert_eq!(Edge::Right.thickness(size), 80.0);
        assert_eq!(Edge::Left.thickness(size), 80.0);
        assert_eq!(Edge::Top.thickness(size), 120.0);
        assert_eq!(Edge::Bottom.thickness(size), 120.0);
    }

    #[test]
    fn test_along_and_origin() {
        let point = Point::new(300.0, 40.0);
        let rect = Rect::new(-50.0, 10.0, 320.0, 480.0);
        assert_eq!(Edge::Right.along(point), 300.0);
        assert_eq!(Edge::Bottom.along(point), 40.0);
        assert_eq!(Edge::Left.origin(rect), -50.0);
        assert_eq!(Edge::Top.origin(rect), 10.0);
        assert_eq!(Edge::Right.extent(rect), 320.0);
        assert_eq!(Edge::Bottom.extent(rect), 480.0);
    }

    #[test]
    fn test_with_origin_preserves_other_fields() {
        let rect = Rect::new(0.0, 0.0, 320.0, 480.0);
        let moved = Edge::Right.with_origin(rect, -80.0);
        assert_eq!(moved, Rect::new(-80.0, 0.0, 320.0, 480.0));
        let moved = Edge::Top.with_origin(rect, 120.0);
        assert_eq!(moved, Rect::new(0.0, 120.0, 320.0, 480.0));
    }
}
