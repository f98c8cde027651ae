//! Capability contracts for the hosting map viewer.
//!
//! The interaction core never touches map internals: elevation sampling,
//! viewport mutation, terrain rendering and frame scheduling are all
//! consumed through these traits, wired up by the host at construction.

use crate::geometry::Vec2;

/// Samples terrain elevation at a map coordinate. Consulted exactly once
/// per gesture, at pointer-down.
pub trait ElevationSource {
    fn elevation_at(&self, coord: Vec2, zoom: f64) -> f64;
}

/// Read/write access to the viewport the gesture pans.
pub trait Viewport {
    fn center(&self) -> Vec2;
    fn set_center(&mut self, center: Vec2);
    /// Map units per pixel at the current zoom.
    fn resolution(&self) -> f64;
    fn zoom(&self) -> f64;
    /// Projects a screen pixel into map coordinates.
    fn coord_from_pixel(&self, px: Vec2) -> Vec2;
    /// True while a competing interaction (rotate, zoom, ...) is live.
    /// The simulation's only cancellation signal.
    fn other_interaction_active(&self) -> bool;
}

/// Terrain layer accepting the per-frame shear distortion.
pub trait ShearRenderer {
    fn set_shear(&mut self, shear: Vec2);
    fn redraw(&mut self);
}

/// One-shot per-display-frame callback primitive. The host arranges for
/// each scheduled frame to call back into
/// [`DragShearInteraction::step_frame`](crate::DragShearInteraction::step_frame).
///
/// Both operations are idempotent: starting a running scheduler and
/// stopping a stopped one are no-ops.
pub trait FrameScheduler {
    fn start(&mut self);
    fn stop(&mut self);
}
