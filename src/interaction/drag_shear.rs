//! Drag-to-shear interaction controller.
//!
//! Owns the gesture state machine and wires the spring-damper engine to the
//! host's viewport, terrain renderer and frame scheduler. Pointer events
//! arrive through [`PointerInteraction`]; the host's scheduler calls
//! [`DragShearInteraction::step_frame`] once per display frame while armed.

use crate::config::{ConfigError, ShearSettings};
use crate::engine::session::DragSession;
use crate::engine::spring::{self, FrameInputs, FrameOutcome};
use crate::geometry::Vec2;
use crate::interaction::pointer::{
    activation, ActivationCondition, PointerEvent, PointerInteraction,
};
use crate::map::{ElevationSource, FrameScheduler, ShearRenderer, Viewport};

pub struct DragShearInteraction {
    settings: ShearSettings,
    condition: ActivationCondition,
    /// Effective spring rest length. Tracks `settings.spring_length` until
    /// hybrid shearing rewrites it per drag event; reset to 0 when the last
    /// pointer lifts.
    spring_length: f64,
    session: DragSession,
    viewport: Box<dyn Viewport>,
    elevation: Box<dyn ElevationSource>,
    renderer: Box<dyn ShearRenderer>,
    scheduler: Box<dyn FrameScheduler>,
}

impl DragShearInteraction {
    /// Builds the interaction with the default activation condition
    /// (no modifier keys held). Fails fast on invalid settings.
    pub fn new(
        settings: ShearSettings,
        viewport: Box<dyn Viewport>,
        elevation: Box<dyn ElevationSource>,
        renderer: Box<dyn ShearRenderer>,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Result<Self, ConfigError> {
        Self::with_condition(
            settings,
            activation::no_modifier_keys(),
            viewport,
            elevation,
            renderer,
            scheduler,
        )
    }

    pub fn with_condition(
        settings: ShearSettings,
        condition: ActivationCondition,
        viewport: Box<dyn Viewport>,
        elevation: Box<dyn ElevationSource>,
        renderer: Box<dyn ShearRenderer>,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let spring_length = settings.spring_length;
        Ok(Self {
            settings,
            condition,
            spring_length,
            session: DragSession::default(),
            viewport,
            elevation,
            renderer,
            scheduler,
        })
    }

    pub fn settings(&self) -> &ShearSettings {
        &self.settings
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Current effective spring rest length.
    pub fn spring_length(&self) -> f64 {
        self.spring_length
    }

    /// Re-checked on every down and drag event: a qualifying event needs an
    /// active pointer, a passing activation condition and enough zoom.
    /// Non-qualifying events are ignored, never errors. The per-event zoom
    /// check means a live gesture pauses while zoom sits below the minimum
    /// and resumes when it returns.
    fn gesture_allowed(&self, event: &PointerEvent) -> bool {
        !event.pointers.is_empty()
            && (self.condition)(event)
            && self.viewport.zoom() >= self.settings.min_zoom
    }

    /// Runs one simulation frame. Wired as the scheduler's callback; also
    /// safe to call while settled (it re-settles without side effects).
    pub fn step_frame(&mut self) {
        let inputs = FrameInputs {
            start_drag_coord: self.viewport.coord_from_pixel(self.session.start_drag_px),
            current_drag_coord: self.viewport.coord_from_pixel(self.session.current_drag_px),
            other_interaction_active: self.viewport.other_interaction_active(),
        };

        match spring::step(&mut self.session, &self.settings, self.spring_length, &inputs) {
            FrameOutcome::Advance { center, shear } => {
                log::trace!(
                    "drag-shear frame: center=({:.3}, {:.3}) shear=({:.5}, {:.5})",
                    center.x,
                    center.y,
                    shear.x,
                    shear.y
                );
                // Renderers must observe a consistent (center, shear) pair:
                // center first, then shear, then the redraw request.
                self.viewport.set_center(center);
                self.renderer.set_shear(shear);
                self.renderer.redraw();
                self.scheduler.start();
            }
            FrameOutcome::Settle { cancel_shear } => {
                if cancel_shear {
                    log::debug!("drag-shear: competing interaction active, cancelling shear");
                    self.renderer.set_shear(Vec2::ZERO);
                    self.renderer.redraw();
                }
                self.scheduler.stop();
            }
        }
    }

    /// Stops the frame loop. Call when discarding the interaction; nothing
    /// stops the scheduler implicitly on drop.
    pub fn teardown(&mut self) {
        self.scheduler.stop();
    }
}

impl PointerInteraction for DragShearInteraction {
    fn handle_down(&mut self, event: &PointerEvent) -> bool {
        if !self.gesture_allowed(event) {
            return false;
        }
        let Some(centroid) = event.centroid() else {
            return false;
        };

        let zoom = self.viewport.zoom();
        let elevation = self.elevation.elevation_at(event.coordinate, zoom);
        self.session.begin(centroid, self.viewport.center(), elevation);
        log::debug!(
            "drag-shear gesture accepted: elevation={:.1} zoom={:.2}",
            self.session.start_elevation,
            zoom
        );
        true
    }

    fn handle_drag(&mut self, event: &PointerEvent) {
        if !self.gesture_allowed(event) {
            return;
        }
        let Some(centroid) = event.centroid() else {
            return;
        };

        self.session.current_drag_px = centroid;
        self.scheduler.start();

        if self.settings.hybrid_shearing_radius_px > 0.0 {
            // Cap the rest length at the pixel-radius bound so the spring
            // tracks the pointer's distance from its animated equilibrium
            // only up to the hybrid radius.
            let current = self.viewport.coord_from_pixel(centroid);
            let start = self.viewport.coord_from_pixel(self.session.start_drag_px);
            let distance = (current - self.session.equilibrium(start)).length();
            let radius = self.settings.hybrid_shearing_radius_px * self.viewport.resolution();
            self.spring_length = radius.min(distance);
        }
    }

    fn handle_up(&mut self, event: &PointerEvent) -> bool {
        if event.pointers.is_empty() {
            self.spring_length = 0.0;
            log::debug!("drag-shear gesture finished, momentum settling");
            // scheduler left running: the released spring coasts until the
            // carried velocity decays below threshold
            true
        } else {
            false
        }
    }
}
