//! Event constructors.

use grapple_core::math::Vec2;
use grapple_input::{EventName, InputEvent, PointerEvent};

/// Mouse event at client `(x, y)`.
pub fn mouse(name: EventName, x: f32, y: f32) -> InputEvent {
    InputEvent::pointer(name, PointerEvent::mouse(Vec2::new(x, y)))
}

pub fn mouse_down(x: f32, y: f32) -> InputEvent {
    mouse(EventName::MouseDown, x, y)
}

pub fn mouse_move(x: f32, y: f32) -> InputEvent {
    mouse(EventName::MouseMove, x, y)
}

pub fn mouse_up(x: f32, y: f32) -> InputEvent {
    mouse(EventName::MouseUp, x, y)
}

/// Touch event with contacts given as `(x, y)` pairs.
pub fn touch(name: EventName, contacts: &[(f32, f32)]) -> InputEvent {
    InputEvent::pointer(
        name,
        PointerEvent::touch(contacts.iter().map(|&(x, y)| Vec2::new(x, y))),
    )
}

pub fn resize() -> InputEvent {
    InputEvent::Resize
}
