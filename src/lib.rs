//! Drag-to-shear interaction for terrain-aware map viewers.
//!
//! Pointer drags feed a spring-damper simulation that pans the viewport and
//! applies an elevation-dependent shear to the terrain layer, giving
//! navigation a tactile, momentum-based feel instead of a 1:1 drag-to-pan
//! mapping. The host supplies elevation sampling, viewport access, terrain
//! rendering and a per-frame scheduler through the traits in [`map`].

pub mod config;
pub mod engine;
pub mod geometry;
pub mod interaction;
pub mod map;

pub use config::{ConfigError, ShearSettings};
pub use engine::session::DragSession;
pub use engine::{CRITICAL_ELEVATION, MAX_ELEVATION, MIN_ELEVATION};
pub use geometry::Vec2;
pub use interaction::drag_shear::DragShearInteraction;
pub use interaction::pointer::{
    activation, ActivationCondition, ActivePointer, ModifierState, PointerEvent,
    PointerInteraction,
};
pub use map::{ElevationSource, FrameScheduler, ShearRenderer, Viewport};
