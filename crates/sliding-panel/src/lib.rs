//! # SlidePanels Core
//!
//! Geometry and touch-drag state machine for a slide-out panel anchored to
//! one edge of the screen. The panel pushes an overlaid "top view" aside
//! when shown; this crate computes the panel's own frame, the top view's
//! resting positions, and the top view's frame while a drag is in
//! progress, plus the shown/hidden verdict when a drag completes.
//!
//! Everything here is pure computation over value types. Applying the
//! returned rectangles to real views, animating between them, and wiring
//! up gesture recognizers are the host's responsibility.

pub mod drag;
pub mod edge;
pub mod layout;

use serde::{Deserialize, Serialize};

use geometry::Size;

pub use drag::{DragController, DragError, Settle};
pub use edge::Edge;
pub use layout::{panel_frame, resting_top_view_frame};

/// Per-panel configuration, fixed at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Panel thickness: width for left/right panels, height for top/bottom
    pub size: Size,
    /// Distance from the anchored edge within which a touch-down starts a
    /// drag while the panel is hidden
    pub edge_tolerance: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            size: Size::new(260.0, 260.0),
            edge_tolerance: 40.0,
        }
    }
}
