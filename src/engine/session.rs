use super::{MAX_ELEVATION, MIN_ELEVATION};
use crate::geometry::Vec2;

/// Mutable state of the active (or most recently released) drag gesture.
///
/// `current_change` is the velocity-like state carried between frames. It
/// deliberately survives pointer-up: it is the sole state that lets the
/// simulation coast and settle instead of snapping, so only a new gesture
/// resets it together with the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    /// Pointer centroid at gesture start, screen pixels.
    pub start_drag_px: Vec2,
    /// Latest pointer centroid, screen pixels.
    pub current_drag_px: Vec2,
    /// Viewport center snapshot at gesture start, map coordinates.
    pub start_center: Vec2,
    /// Viewport center as animated by the spring, map coordinates.
    pub current_center: Vec2,
    /// Per-frame velocity state, map coordinates per frame.
    pub current_change: Vec2,
    /// Elevation sampled at gesture start, fixed for the gesture lifetime.
    pub start_elevation: f64,
}

impl DragSession {
    /// Resets the session for a newly accepted gesture. Centers are
    /// snapshotted by value; the elevation sample is clamped into the
    /// engine's elevation range so both regime denominators stay positive.
    pub fn begin(&mut self, drag_px: Vec2, center: Vec2, elevation: f64) {
        self.start_drag_px = drag_px;
        self.current_drag_px = drag_px;
        self.start_center = center;
        self.current_center = center;
        self.current_change = Vec2::ZERO;
        self.start_elevation = elevation.clamp(MIN_ELEVATION, MAX_ELEVATION);
    }

    /// The drag point as it would sit had the view not moved since gesture
    /// start: the spring's equilibrium, compensating for panning already
    /// applied.
    pub fn equilibrium(&self, start_drag_coord: Vec2) -> Vec2 {
        start_drag_coord - (self.current_center - self.start_center)
    }
}
