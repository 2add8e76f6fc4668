//! Touch-drag session state machine.
//!
//! One controller per panel. The host forwards touch-began/moved/ended
//! events; the controller records reference coordinates at drag start,
//! turns each move into a clamped top-view frame, and classifies the
//! finished drag as settling shown or hidden.
//!
//! All rectangles and touch points are in effective screen coordinates
//! for the current rotation (see [`geometry::oriented_extent`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use geometry::{Point, Rect, Size};

use crate::edge::Edge;

/// Drag-session misuse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DragError {
    /// `sliding` or `sliding_ended` was called with no session open
    #[error("no drag session is active")]
    NoActiveSession,
    /// `sliding_started` was called while a session is already open
    #[error("a drag session is already active")]
    SessionActive,
}

/// Where a completed drag should come to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settle {
    /// The top view crossed the panel's midpoint; expose the panel
    Visible,
    /// The drag did not complete; return the top view to cover the panel
    Hidden,
}

/// Reference coordinates captured at drag start, along the sliding axis.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    touch_start: f32,
    top_view_start: f32,
}

/// Drag state machine for one panel.
///
/// Lifecycle: `sliding_started` opens a session, `sliding` is called once
/// per touch-move, `sliding_ended` closes the session and yields the
/// settle verdict. `cancel` discards an interrupted session. Calls out of
/// that order fail with [`DragError`] instead of computing against stale
/// session data.
#[derive(Debug)]
pub struct DragController {
    edge: Edge,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(edge: Edge) -> Self {
        Self { edge, session: None }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Is a drag session open?
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Should a touch at this position begin a drag?
    ///
    /// Hidden panel: the touch must land within `edge_tolerance` of the
    /// anchored edge along the sliding axis. Visible panel: the exposed
    /// top view acts as the drag handle, so any touch inside its current
    /// frame qualifies.
    pub fn can_start_sliding(
        &self,
        touch: Point,
        top_view: Rect,
        visible: bool,
        bounds: Rect,
        edge_tolerance: f32,
    ) -> bool {
        if visible {
            return top_view.contains(touch);
        }

        let along = self.edge.along(touch);
        let screen = screen_extent_along(self.edge, bounds);
        if anchored_at_far_side(self.edge) {
            along >= screen - edge_tolerance && along <= screen
        } else {
            along >= 0.0 && along <= edge_tolerance
        }
    }

    /// Open a session, capturing the touch and top-view reference
    /// coordinates along the sliding axis.
    pub fn sliding_started(&mut self, touch: Point, top_view: Rect) -> Result<(), DragError> {
        if self.session.is_some() {
            return Err(DragError::SessionActive);
        }

        self.session = Some(DragSession {
            touch_start: self.edge.along(touch),
            top_view_start: self.edge.origin(top_view),
        });
        Ok(())
    }

    /// Candidate top-view frame for a live touch position.
    ///
    /// The frame's sliding-axis origin follows the touch translation and
    /// snaps to the hidden resting position when it would overshoot the
    /// screen edge, or to the shown resting position when it would retreat
    /// past the fully-exposed panel. Clamping is total: the returned
    /// origin never leaves the [shown, hidden] interval.
    pub fn sliding(
        &self,
        touch: Point,
        top_view: Rect,
        bounds: Rect,
        size: Size,
    ) -> Result<Rect, DragError> {
        let session = self.session.ok_or(DragError::NoActiveSession)?;

        let translation = self.edge.along(touch) - session.touch_start;
        let candidate = session.top_view_start + translation;

        let screen = screen_extent_along(self.edge, bounds);
        let panel = self.edge.thickness(size);
        let frame_extent = self.edge.extent(top_view);

        let mut origin = candidate;
        if anchored_at_far_side(self.edge) {
            // The trailing edge of the top view may neither pass the far
            // screen edge nor retreat past the fully-exposed panel. Both
            // checks run in this order; if degenerate geometry makes both
            // fire, the shown snap wins.
            let trailing = candidate + frame_extent;
            if trailing >= screen {
                origin = 0.0;
            }
            if trailing <= screen - panel {
                origin = (screen - panel) - frame_extent;
            }
        } else {
            if candidate <= 0.0 {
                origin = 0.0;
            }
            if candidate >= panel {
                origin = panel;
            }
        }

        Ok(self.edge.with_origin(top_view, origin))
    }

    /// Close the session and classify the finished drag.
    ///
    /// The verdict depends only on where the top view came to rest: once
    /// it has crossed the midpoint of the panel's thickness toward shown,
    /// the drag settles visible; otherwise it reverts to hidden.
    pub fn sliding_ended(
        &mut self,
        top_view: Rect,
        bounds: Rect,
        size: Size,
    ) -> Result<Settle, DragError> {
        if self.session.take().is_none() {
            return Err(DragError::NoActiveSession);
        }

        let screen = screen_extent_along(self.edge, bounds);
        let panel = self.edge.thickness(size);

        let past_midpoint = if anchored_at_far_side(self.edge) {
            let trailing = self.edge.origin(top_view) + self.edge.extent(top_view);
            trailing < screen - panel / 2.0
        } else {
            self.edge.origin(top_view) > panel / 2.0
        };

        Ok(if past_midpoint { Settle::Visible } else { Settle::Hidden })
    }

    /// Discard an interrupted session without a verdict.
    ///
    /// Hosts must route every externally cancelled gesture through here
    /// (or `sliding_ended`) so a session is never left open.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

/// Screen dimension along the panel's sliding axis
fn screen_extent_along(edge: Edge, bounds: Rect) -> f32 {
    if edge.is_horizontal() {
        bounds.width
    } else {
        bounds.height
    }
}

/// Right and bottom panels anchor at the maximum coordinate of their axis
fn anchored_at_far_side(edge: Edge) -> bool {
    matches!(edge, Edge::Right | Edge::Bottom)
}
