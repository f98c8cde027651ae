//! Per-frame spring-damper integration.
//!
//! [`step`] is a pure function of the drag session, the validated settings
//! and the live state sampled for this frame. It mutates the session
//! (velocity, animated center) and reports whether the caller should keep
//! the frame loop armed. All viewport/renderer side effects are left to the
//! caller so the physics stays testable in isolation.

use super::session::DragSession;
use super::{CRITICAL_ELEVATION, MAX_ELEVATION};
use crate::config::ShearSettings;
use crate::geometry::Vec2;

/// Live state sampled once at the top of each frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs {
    /// Gesture-start pointer centroid projected to map coordinates.
    pub start_drag_coord: Vec2,
    /// Latest pointer centroid projected to map coordinates.
    pub current_drag_coord: Vec2,
    /// Whether a competing interaction (rotate, zoom) is live.
    pub other_interaction_active: bool,
}

/// What the frame decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Keep animating: push `center` and `shear` to the host, redraw, and
    /// re-arm the scheduler.
    Advance { center: Vec2, shear: Vec2 },
    /// Velocity decayed (or a competing interaction took over): stop the
    /// scheduler. `cancel_shear` asks the caller to zero the rendered
    /// shear first, leaving the center untouched.
    Settle { cancel_shear: bool },
}

/// Advances the simulation by one frame.
///
/// `spring_length` is the effective rest length, runtime-mutated by hybrid
/// shearing; the spring pulls the displacement toward that length rather
/// than toward zero, which opens a dead zone where terrain shears without
/// panning.
pub fn step(
    session: &mut DragSession,
    settings: &ShearSettings,
    spring_length: f64,
    inputs: &FrameInputs,
) -> FrameOutcome {
    let equilibrium = session.equilibrium(inputs.start_drag_coord);
    let delta = inputs.current_drag_coord - equilibrium;
    let distance = delta.length();

    // 0/0 at zero displacement is defined as no rest-length contribution.
    let rest = if distance == 0.0 {
        Vec2::ZERO
    } else {
        delta * (spring_length / distance)
    };

    let acceleration = (delta - rest) * settings.spring_coefficient;
    let friction = 1.0 - settings.friction_force;
    let mut change = session.current_change * friction + acceleration;

    // Snap each axis to exactly zero once it stops changing significantly,
    // so decay terminates instead of approaching zero forever.
    if change.x.abs() < settings.threshold {
        change.x = 0.0;
    }
    if change.y.abs() < settings.threshold {
        change.y = 0.0;
    }
    session.current_change = change;

    let animation_active =
        change.x.abs() > settings.threshold && change.y.abs() > settings.threshold;
    let hybrid_active = rest.x != 0.0 && rest.y != 0.0;

    if (animation_active || hybrid_active) && !inputs.other_interaction_active {
        session.current_center -= change;

        let delta = inputs.current_drag_coord - session.equilibrium(inputs.start_drag_coord);

        if session.start_elevation < CRITICAL_ELEVATION {
            // Deep regime: shear rebases against the opposite elevation
            // bound and inverts, and the center pushed to the host gets the
            // full displacement on top of the spring step. The extra offset
            // is render-only; the session keeps the integrated center.
            let shear = -delta / (MAX_ELEVATION - session.start_elevation);
            FrameOutcome::Advance {
                center: session.current_center - delta,
                shear,
            }
        } else {
            FrameOutcome::Advance {
                center: session.current_center,
                shear: delta / session.start_elevation,
            }
        }
    } else {
        FrameOutcome::Settle {
            cancel_shear: inputs.other_interaction_active,
        }
    }
}
