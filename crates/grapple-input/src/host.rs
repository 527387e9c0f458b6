//! Traits implemented by the host runtime.
//!
//! The drag controller never owns the element or window it works with; it
//! holds host handles and only queries layout, applies placements, emits
//! notifications and manages its own listeners through them.

use std::time::Duration;

use grapple_core::math::Vec2;

use crate::event::{EventName, ListenerId, TimerId};

/// Something listeners can be attached to.
pub trait EventTarget {
    /// Register interest in `name`. The returned handle is the only way to
    /// release the listener again.
    fn listen(&mut self, name: EventName) -> ListenerId;

    /// Release a listener. Unknown or already released handles are ignored.
    fn unlisten(&mut self, id: ListenerId);
}

/// The dragged element.
pub trait HostElement: EventTarget {
    /// Rendered screen position, transforms included.
    fn offset(&self) -> Vec2;

    /// Rendered position relative to the element's containing frame.
    fn position(&self) -> Vec2;

    /// Translation currently applied through a transform.
    fn translation(&self) -> Vec2;

    /// Apply a placement to the element's style.
    fn apply(&mut self, placement: Placement);

    /// Fire a drag notification on the element.
    fn trigger(&mut self, notification: DragNotification);
}

/// The surface wider than the element (the window) that carries move/up
/// listeners during a drag, resize signals and timers.
pub trait HostWindow: EventTarget {
    /// Default touch capability probe.
    fn supports_touch(&self) -> bool;

    /// Schedule a one-shot timer. The host later delivers
    /// [`InputEvent::Timer`](crate::InputEvent::Timer) with the returned id.
    fn set_timeout(&mut self, delay: Duration) -> TimerId;
}

/// Style change requested by a move strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Shift visually via a 2D translation, keeping the layout slot.
    Translate {
        offset: Vec2,
        /// Use the `translate3d` form. Visually identical to the plain one.
        accelerated: bool,
    },
    /// `position: absolute` at `top_left`, taking the element out of flow.
    Absolute { top_left: Vec2 },
}

impl Placement {
    /// Local position this placement puts the element at.
    pub fn point(&self) -> Vec2 {
        match self {
            Placement::Translate { offset, .. } => *offset,
            Placement::Absolute { top_left } => *top_left,
        }
    }

    /// CSS declarations equivalent to this placement.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        match *self {
            Placement::Translate {
                offset,
                accelerated: false,
            } => vec![(
                "transform",
                format!("translate({}px, {}px)", offset.x, offset.y),
            )],
            Placement::Translate {
                offset,
                accelerated: true,
            } => vec![(
                "transform",
                format!("translate3d({}px, {}px, 0px)", offset.x, offset.y),
            )],
            Placement::Absolute { top_left } => vec![
                ("position", "absolute".to_string()),
                ("top", format!("{}px", top_left.y)),
                ("left", format!("{}px", top_left.x)),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    DragStart,
    DragMove,
    DragEnd,
}

impl NotificationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::DragStart => "dragstart",
            NotificationKind::DragMove => "dragmove",
            NotificationKind::DragEnd => "dragend",
        }
    }
}

/// Notification fired on the element, carrying the session's delta and percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragNotification {
    pub kind: NotificationKind,
    pub delta: Vec2,
    pub percent: Vec2,
}
