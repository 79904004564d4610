//! Pan and zoom state for the diagram viewport.
//!
//! [`ViewportController`] owns a [`ViewState`] and an optional
//! [`DragSession`]. Pointer and zoom events are explicit method calls; after
//! any of them the caller reads [`ViewportController::current_transform`] and
//! re-renders.
//!
//! ```text
//!        begin_drag              update_drag
//!   Idle ───────────► Dragging ◄────────────┐
//!    ▲                   │  └───────────────┘
//!    └───────────────────┘
//!     end_drag | pointer_leave
//! ```
//!
//! Every operation is total: zoom is clamped silently to
//! [`MIN_ZOOM`]..=[`MAX_ZOOM`] and pan is unbounded.
//!
//! # Examples
//!
//! ```
//! # use dfdview_core::viewport::ViewportController;
//! # use dfdview_core::geometry::Point;
//! let mut viewport = ViewportController::new();
//! viewport.begin_drag(100.0, 100.0);
//! viewport.update_drag(150.0, 120.0);
//! viewport.end_drag();
//!
//! assert_eq!(viewport.state().pan(), Point::new(50.0, 20.0));
//! assert!(viewport.current_transform().apply(Point::default()) == Point::new(50.0, 20.0));
//! ```

use log::trace;

use crate::geometry::{Point, Transform};

/// Smallest reachable zoom factor.
pub const MIN_ZOOM: f32 = 0.5;
/// Largest reachable zoom factor.
pub const MAX_ZOOM: f32 = 2.0;
/// Zoom change per zoom-in or zoom-out step.
pub const ZOOM_STEP: f32 = 0.1;

/// Current zoom factor and pan offset.
///
/// Pan is measured in screen units, so a scene point `p` appears at
/// `zoom * p + pan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    zoom: f32,
    pan: Point,
}

impl ViewState {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::default(),
        }
    }
}

/// An in-progress pointer drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position minus pan at the moment the drag began.
    anchor: Point,
}

impl DragSession {
    pub fn anchor(&self) -> Point {
        self.anchor
    }
}

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Translates zoom and pointer events into view state.
#[derive(Debug, Default, Clone)]
pub struct ViewportController {
    state: ViewState,
    drag: Option<DragSession>,
}

impl ViewportController {
    /// Creates a controller at zoom 1 with no pan.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The active drag, if any.
    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn drag_state(&self) -> DragState {
        if self.drag.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    /// Increases zoom by one step, clamped to [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) {
        self.state.zoom = (self.state.zoom + ZOOM_STEP).min(MAX_ZOOM);
        trace!(zoom = self.state.zoom; "Zoomed in");
    }

    /// Decreases zoom by one step, clamped to [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        self.state.zoom = (self.state.zoom - ZOOM_STEP).max(MIN_ZOOM);
        trace!(zoom = self.state.zoom; "Zoomed out");
    }

    /// Starts a drag at the pointer position, replacing any active drag.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        let anchor = Point::new(x, y).sub_point(self.state.pan);
        self.drag = Some(DragSession { anchor });
        trace!(x, y, anchor_x = anchor.x(), anchor_y = anchor.y(); "Drag started");
    }

    /// Moves the pan so the anchor stays under the pointer. Ignored when idle.
    pub fn update_drag(&mut self, x: f32, y: f32) {
        let Some(session) = self.drag else {
            return;
        };
        self.state.pan = Point::new(x, y).sub_point(session.anchor);
        trace!(pan_x = self.state.pan.x(), pan_y = self.state.pan.y(); "Panned");
    }

    /// Ends the active drag, if any.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            trace!("Drag ended");
        }
    }

    /// The pointer left the viewport; ends the drag so it cannot get stuck.
    pub fn pointer_leave(&mut self) {
        self.end_drag();
    }

    /// The view transform: `scale(zoom) translate(pan / zoom)`.
    ///
    /// Maps a scene point `p` to `zoom * p + pan`.
    pub fn current_transform(&self) -> Transform {
        let ViewState { zoom, pan } = self.state;
        Transform::scale(zoom).then(Transform::translate(pan.x() / zoom, pan.y() / zoom))
    }

    /// Zoom as a whole percentage, as shown next to the zoom controls.
    pub fn zoom_percent(&self) -> u32 {
        (self.state.zoom * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::{approx_eq, assert_approx_eq};

    use super::*;

    fn assert_pan(viewport: &ViewportController, x: f32, y: f32) {
        let pan = viewport.state().pan();
        assert_approx_eq!(f32, pan.x(), x);
        assert_approx_eq!(f32, pan.y(), y);
    }

    #[test]
    fn test_initial_state() {
        let viewport = ViewportController::new();
        assert_approx_eq!(f32, viewport.state().zoom(), 1.0);
        assert!(viewport.state().pan().is_zero());
        assert_eq!(viewport.drag_state(), DragState::Idle);
        assert_eq!(viewport.zoom_percent(), 100);
    }

    #[test]
    fn test_zoom_in_then_out_restores() {
        let mut viewport = ViewportController::new();
        viewport.zoom_in();
        assert_eq!(viewport.zoom_percent(), 110);
        viewport.zoom_out();
        assert_approx_eq!(f32, viewport.state().zoom(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut viewport = ViewportController::new();
        for _ in 0..15 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.state().zoom(), MAX_ZOOM);
        assert_eq!(viewport.zoom_percent(), 200);

        for _ in 0..20 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.state().zoom(), MIN_ZOOM);
        assert_eq!(viewport.zoom_percent(), 50);
    }

    #[test]
    fn test_drag_pans() {
        let mut viewport = ViewportController::new();
        viewport.begin_drag(100.0, 100.0);
        assert_eq!(viewport.drag_state(), DragState::Dragging);
        viewport.update_drag(150.0, 120.0);
        assert_pan(&viewport, 50.0, 20.0);
    }

    #[test]
    fn test_update_after_end_is_ignored() {
        let mut viewport = ViewportController::new();
        viewport.begin_drag(100.0, 100.0);
        viewport.update_drag(150.0, 120.0);
        viewport.end_drag();
        viewport.update_drag(400.0, 400.0);

        assert_eq!(viewport.drag_state(), DragState::Idle);
        assert_pan(&viewport, 50.0, 20.0);
    }

    #[test]
    fn test_update_without_drag_is_ignored() {
        let mut viewport = ViewportController::new();
        viewport.update_drag(10.0, 10.0);
        assert!(viewport.state().pan().is_zero());
    }

    #[test]
    fn test_pointer_leave_matches_end_drag() {
        let mut released = ViewportController::new();
        let mut left = ViewportController::new();

        for viewport in [&mut released, &mut left] {
            viewport.begin_drag(10.0, 10.0);
            viewport.update_drag(30.0, 40.0);
        }
        released.end_drag();
        left.pointer_leave();

        for viewport in [&mut released, &mut left] {
            viewport.update_drag(90.0, 90.0);
        }

        assert_eq!(released.state(), left.state());
        assert_eq!(released.drag_state(), DragState::Idle);
        assert_eq!(left.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let mut viewport = ViewportController::new();
        viewport.end_drag();
        viewport.pointer_leave();
        viewport.end_drag();
        assert_eq!(viewport.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_sequence_and_reanchor() {
        let mut viewport = ViewportController::new();
        viewport.begin_drag(0.0, 0.0);
        viewport.update_drag(10.0, 0.0);
        viewport.update_drag(20.0, 0.0);
        viewport.end_drag();
        assert_pan(&viewport, 20.0, 0.0);

        viewport.begin_drag(5.0, 5.0);
        let anchor = viewport.drag_session().unwrap().anchor();
        assert_approx_eq!(f32, anchor.x(), -15.0);
        assert_approx_eq!(f32, anchor.y(), 5.0);

        // A press with no movement leaves pan where it was.
        viewport.update_drag(5.0, 5.0);
        assert_pan(&viewport, 20.0, 0.0);
    }

    #[test]
    fn test_begin_drag_overwrites_anchor() {
        let mut viewport = ViewportController::new();
        viewport.begin_drag(10.0, 10.0);
        viewport.begin_drag(50.0, 60.0);
        viewport.update_drag(55.0, 70.0);
        assert_pan(&viewport, 5.0, 10.0);
    }

    #[test]
    fn test_pan_is_unbounded() {
        let mut viewport = ViewportController::new();
        viewport.begin_drag(0.0, 0.0);
        viewport.update_drag(-1.0e6, 5.0e6);
        assert_pan(&viewport, -1.0e6, 5.0e6);
    }

    #[test]
    fn test_initial_transform_is_identity() {
        assert!(ViewportController::new().current_transform().is_identity());
    }

    #[test]
    fn test_transform_maps_scene_to_screen() {
        let mut viewport = ViewportController::new();
        viewport.zoom_in();
        viewport.zoom_in();
        viewport.begin_drag(0.0, 0.0);
        viewport.update_drag(30.0, -40.0);

        let transform = viewport.current_transform();
        let zoom = viewport.state().zoom();
        assert_approx_eq!(f32, transform.scale_x(), zoom);
        assert_approx_eq!(f32, transform.scale_y(), zoom);

        let mapped = transform.apply(Point::new(100.0, 200.0));
        assert_approx_eq!(f32, mapped.x(), zoom * 100.0 + 30.0, epsilon = 1e-3);
        assert_approx_eq!(f32, mapped.y(), zoom * 200.0 - 40.0, epsilon = 1e-3);
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        #[derive(Debug, Clone, Copy)]
        enum Event {
            ZoomIn,
            ZoomOut,
            Press(f32, f32),
            Move(f32, f32),
            Release,
            Leave,
        }

        fn coord() -> impl Strategy<Value = f32> {
            -5000.0f32..5000.0
        }

        fn event() -> impl Strategy<Value = Event> {
            prop_oneof![
                Just(Event::ZoomIn),
                Just(Event::ZoomOut),
                (coord(), coord()).prop_map(|(x, y)| Event::Press(x, y)),
                (coord(), coord()).prop_map(|(x, y)| Event::Move(x, y)),
                Just(Event::Release),
                Just(Event::Leave),
            ]
        }

        fn apply(viewport: &mut ViewportController, event: Event) {
            match event {
                Event::ZoomIn => viewport.zoom_in(),
                Event::ZoomOut => viewport.zoom_out(),
                Event::Press(x, y) => viewport.begin_drag(x, y),
                Event::Move(x, y) => viewport.update_drag(x, y),
                Event::Release => viewport.end_drag(),
                Event::Leave => viewport.pointer_leave(),
            }
        }

        proptest! {
            #[test]
            fn zoom_stays_in_range(events in prop::collection::vec(event(), 0..200)) {
                let mut viewport = ViewportController::new();
                for event in events {
                    apply(&mut viewport, event);
                    let zoom = viewport.state().zoom();
                    prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
                    prop_assert!((50..=200).contains(&viewport.zoom_percent()));
                }
            }

            #[test]
            fn transform_places_pan_at_origin(events in prop::collection::vec(event(), 0..50)) {
                let mut viewport = ViewportController::new();
                for event in events {
                    apply(&mut viewport, event);
                }

                let origin = viewport.current_transform().apply(Point::default());
                let pan = viewport.state().pan();
                prop_assert!(approx_eq!(f32, origin.x(), pan.x(), epsilon = 1e-2));
                prop_assert!(approx_eq!(f32, origin.y(), pan.y(), epsilon = 1e-2));
            }

            #[test]
            fn idle_moves_never_pan(x in coord(), y in coord()) {
                let mut viewport = ViewportController::new();
                viewport.update_drag(x, y);
                prop_assert!(viewport.state().pan().is_zero());
            }
        }
    }
}
