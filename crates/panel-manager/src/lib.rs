//! # SlidePanels Manager
//!
//! Coordination layer above the geometry/drag core: keeps a registry of
//! panels (at most one per screen edge), tracks which panel is showing,
//! and routes the host's touch events to the owning panel's drag
//! controller. Emits [`PanelEvent`]s so the host can react to visibility
//! changes; it never touches views itself — every operation returns the
//! rectangles for the host to apply.

use std::collections::HashMap;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use geometry::{oriented_extent, Orientation, Point, Rect};
use sliding_panel::{
    panel_frame, resting_top_view_frame, DragController, Edge, PanelConfig, Settle,
};

/// Panel lifecycle and drag events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    Registered(Edge),
    Unregistered(Edge),
    Shown(Edge),
    Hidden(Edge),
    DragStarted(Edge),
    DragEnded { edge: Edge, settle: Settle },
}

struct PanelState {
    config: PanelConfig,
    visible: bool,
    controller: DragController,
}

impl PanelState {
    fn new(edge: Edge, config: PanelConfig) -> Self {
        Self {
            config,
            visible: false,
            controller: DragController::new(edge),
        }
    }
}

/// Panel manager service
pub struct PanelManager {
    /// Registered panels by anchored edge
    panels: RwLock<HashMap<Edge, PanelState>>,
    /// Edge owning the in-progress drag, if any
    active_drag: RwLock<Option<Edge>>,
    /// Event sender
    event_tx: broadcast::Sender<PanelEvent>,
}

impl PanelManager {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(64);

        Self {
            panels: RwLock::new(HashMap::new()),
            active_drag: RwLock::new(None),
            event_tx,
        }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<PanelEvent> {
        self.event_tx.subscribe()
    }

    /// Register a panel on an edge. Replaces any panel already anchored
    /// there; the replacement starts hidden with no drag session.
    pub fn register(&self, edge: Edge, config: PanelConfig) {
        let mut panels = self.panels.write();
        if panels.insert(edge, PanelState::new(edge, config)).is_some() {
            tracing::warn!(?edge, "replacing panel already registered on this edge");
        }

        let _ = self.event_tx.send(PanelEvent::Registered(edge));
    }

    /// Remove a panel, discarding any drag it owns.
    pub fn unregister(&self, edge: Edge) -> bool {
        let removed = self.panels.write().remove(&edge).is_some();
        if removed {
            let mut active = self.active_drag.write();
            if *active == Some(edge) {
                *active = None;
            }
            let _ = self.event_tx.send(PanelEvent::Unregistered(edge));
        }
        removed
    }

    /// Is this edge's panel currently shown?
    pub fn is_visible(&self, edge: Edge) -> bool {
        self.panels.read().get(&edge).map(|p| p.visible).unwrap_or(false)
    }

    /// The edge of the currently shown panel, if any
    pub fn visible_panel(&self) -> Option<Edge> {
        self.panels
            .read()
            .iter()
            .find(|(_, state)| state.visible)
            .map(|(edge, _)| *edge)
    }

    /// Configuration of a registered panel
    pub fn config(&self, edge: Edge) -> Option<PanelConfig> {
        self.panels.read().get(&edge).map(|p| p.config)
    }

    /// The panel's own resting frame for the current rotation
    pub fn panel_frame(&self, edge: Edge, bounds: Rect, orientation: Orientation) -> Option<Rect> {
        let panels = self.panels.read();
        let state = panels.get(&edge)?;
        Some(panel_frame(bounds, orientation, state.config.size, edge))
    }

    /// The top view's resting frame for this panel's tracked visibility
    pub fn resting_top_view_frame(
        &self,
        edge: Edge,
        current: Rect,
        orientation: Orientation,
    ) -> Option<Rect> {
        let panels = self.panels.read();
        let state = panels.get(&edge)?;
        Some(resting_top_view_frame(
            current,
            orientation,
            state.visible,
            state.config.size,
            edge,
        ))
    }

    /// Show a panel, hiding any other shown panel first. Returns the top
    /// view's new resting frame for the host to apply.
    pub fn show(&self, edge: Edge, current: Rect, orientation: Orientation) -> Option<Rect> {
        let mut panels = self.panels.write();
        if !panels.contains_key(&edge) {
            return None;
        }

        for (other, state) in panels.iter_mut() {
            if *other != edge && state.visible {
                state.visible = false;
                let _ = self.event_tx.send(PanelEvent::Hidden(*other));
            }
        }

        let state = panels.get_mut(&edge)?;
        if !state.visible {
            state.visible = true;
            let _ = self.event_tx.send(PanelEvent::Shown(edge));
        }

        Some(resting_top_view_frame(
            current,
            orientation,
            true,
            state.config.size,
            edge,
        ))
    }

    /// Hide a panel. Returns the top view's new resting frame.
    pub fn hide(&self, edge: Edge, current: Rect, orientation: Orientation) -> Option<Rect> {
        let mut panels = self.panels.write();
        let state = panels.get_mut(&edge)?;

        if state.visible {
            state.visible = false;
            let _ = self.event_tx.send(PanelEvent::Hidden(edge));
        }

        Some(resting_top_view_frame(
            current,
            orientation,
            false,
            state.config.size,
            edge,
        ))
    }

    /// Toggle a panel between shown and hidden
    pub fn toggle(&self, edge: Edge, current: Rect, orientation: Orientation) -> Option<Rect> {
        if self.is_visible(edge) {
            self.hide(edge, current, orientation)
        } else {
            self.show(edge, current, orientation)
        }
    }

    /// Route a touch-down. Starts a drag on the first registered panel
    /// that accepts the touch and reports whether one did. Refused while
    /// another drag is in progress.
    pub fn touch_began(
        &self,
        touch: Point,
        top_view: Rect,
        bounds: Rect,
        orientation: Orientation,
    ) -> bool {
        let mut active = self.active_drag.write();
        if active.is_some() {
            tracing::warn!("touch began while a drag is already in progress; ignoring");
            return false;
        }

        let effective = effective_bounds(bounds, orientation);
        let mut panels = self.panels.write();
        for (edge, state) in panels.iter_mut() {
            let accepts = state.controller.can_start_sliding(
                touch,
                top_view,
                state.visible,
                effective,
                state.config.edge_tolerance,
            );
            if !accepts {
                continue;
            }

            match state.controller.sliding_started(touch, top_view) {
                Ok(()) => {
                    *active = Some(*edge);
                    let _ = self.event_tx.send(PanelEvent::DragStarted(*edge));
                    return true;
                }
                Err(err) => {
                    tracing::warn!(?edge, %err, "could not start drag session");
                    return false;
                }
            }
        }

        false
    }

    /// Route a touch-move. Returns the candidate top-view frame, or
    /// `None` when no drag is in progress (the event is logged and
    /// dropped).
    pub fn touch_moved(
        &self,
        touch: Point,
        top_view: Rect,
        bounds: Rect,
        orientation: Orientation,
    ) -> Option<Rect> {
        let active = *self.active_drag.read();
        let Some(edge) = active else {
            tracing::warn!("touch moved with no drag in progress; ignoring");
            return None;
        };

        let effective = effective_bounds(bounds, orientation);
        let panels = self.panels.read();
        let state = panels.get(&edge)?;
        match state.controller.sliding(touch, top_view, effective, state.config.size) {
            Ok(frame) => Some(frame),
            Err(err) => {
                tracing::warn!(?edge, %err, "dropping malformed touch-move");
                None
            }
        }
    }

    /// Route a touch-up. Settles the drag, updates the panel's
    /// visibility, and returns the top view's resting frame to apply.
    pub fn touch_ended(
        &self,
        top_view: Rect,
        bounds: Rect,
        orientation: Orientation,
    ) -> Option<Rect> {
        let Some(edge) = self.active_drag.write().take() else {
            tracing::warn!("touch ended with no drag in progress; ignoring");
            return None;
        };

        let effective = effective_bounds(bounds, orientation);
        let mut panels = self.panels.write();
        let state = panels.get_mut(&edge)?;

        let settle = match state
            .controller
            .sliding_ended(top_view, effective, state.config.size)
        {
            Ok(settle) => settle,
            Err(err) => {
                tracing::warn!(?edge, %err, "dropping malformed touch-up");
                return None;
            }
        };

        let _ = self.event_tx.send(PanelEvent::DragEnded { edge, settle });

        let visible = settle == Settle::Visible;
        if state.visible != visible {
            state.visible = visible;
            let _ = self.event_tx.send(if visible {
                PanelEvent::Shown(edge)
            } else {
                PanelEvent::Hidden(edge)
            });
        }

        Some(resting_top_view_frame(
            top_view,
            orientation,
            visible,
            state.config.size,
            edge,
        ))
    }

    /// Discard an interrupted drag. Safe to call with no drag active.
    pub fn touch_cancelled(&self) {
        let Some(edge) = self.active_drag.write().take() else {
            return;
        };

        if let Some(state) = self.panels.write().get_mut(&edge) {
            state.controller.cancel();
        }
    }
}

impl Default for PanelManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen bounds reinterpreted for the current rotation, origin at zero
fn effective_bounds(bounds: Rect, orientation: Orientation) -> Rect {
    let extent = oriented_extent(bounds, orientation);
    Rect::new(0.0, 0.0, extent.width, extent.height)
}
