//! Pointer events and the interaction capability they are dispatched to.

use crate::geometry::Vec2;

/// Modifier keys held while a pointer event fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl ModifierState {
    pub fn any(self) -> bool {
        self.alt || self.ctrl || self.shift || self.meta
    }
}

/// One active pointer (mouse button, touch, pen) in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePointer {
    pub id: u64,
    pub position_px: Vec2,
}

/// A down/drag/up event delivered by the host's pointer source.
///
/// `pointers` holds every pointer still touching the target after this
/// event — empty on the final up of a gesture.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub pointers: Vec<ActivePointer>,
    pub modifiers: ModifierState,
    /// Event position projected into map coordinates by the host.
    pub coordinate: Vec2,
}

impl PointerEvent {
    /// Mean position of all active pointers, or `None` when none remain.
    pub fn centroid(&self) -> Option<Vec2> {
        if self.pointers.is_empty() {
            return None;
        }
        let sum = self
            .pointers
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.position_px);
        Some(sum / self.pointers.len() as f64)
    }
}

/// Predicate gating gesture activation, evaluated on every down and drag
/// event.
pub type ActivationCondition = Box<dyn Fn(&PointerEvent) -> bool>;

/// Stock activation conditions.
pub mod activation {
    use super::{ActivationCondition, PointerEvent};

    /// Activates only while no modifier key is held. The default.
    pub fn no_modifier_keys() -> ActivationCondition {
        Box::new(|event: &PointerEvent| !event.modifiers.any())
    }

    /// Activates unconditionally.
    pub fn always() -> ActivationCondition {
        Box::new(|_: &PointerEvent| true)
    }

    /// Activates only while the shift key is held.
    pub fn shift_key_only() -> ActivationCondition {
        Box::new(|event: &PointerEvent| {
            event.modifiers.shift
                && !event.modifiers.alt
                && !event.modifiers.ctrl
                && !event.modifiers.meta
        })
    }
}

/// Capability a pointer-gesture dispatcher drives. Down returns whether the
/// gesture was accepted (the dispatcher then routes drag/up events here);
/// up returns whether the drag sequence is finished.
pub trait PointerInteraction {
    fn handle_down(&mut self, event: &PointerEvent) -> bool;
    fn handle_drag(&mut self, event: &PointerEvent);
    fn handle_up(&mut self, event: &PointerEvent) -> bool;
}
