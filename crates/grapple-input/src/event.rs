use std::collections::VecDeque;
use std::str::FromStr;

use grapple_core::math::Vec2;
use smallvec::SmallVec;

use crate::error::InputError;

/// Handle returned by [`EventTarget::listen`](crate::EventTarget::listen).
///
/// Listeners are released through the handle they were registered with, so
/// unrelated listeners sharing an event name on the same target are never
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Handle returned by [`HostWindow::set_timeout`](crate::HostWindow::set_timeout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Names of the host events a drag controller listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    /// Host surface (window) resized.
    Resize,
}

impl EventName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventName::MouseDown => "mousedown",
            EventName::MouseMove => "mousemove",
            EventName::MouseUp => "mouseup",
            EventName::TouchStart => "touchstart",
            EventName::TouchMove => "touchmove",
            EventName::TouchEnd => "touchend",
            EventName::Resize => "resize",
        }
    }

    pub const fn is_touch(&self) -> bool {
        matches!(
            self,
            EventName::TouchStart | EventName::TouchMove | EventName::TouchEnd
        )
    }

    pub const fn is_move(&self) -> bool {
        matches!(self, EventName::MouseMove | EventName::TouchMove)
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mousedown" => Ok(EventName::MouseDown),
            "mousemove" => Ok(EventName::MouseMove),
            "mouseup" => Ok(EventName::MouseUp),
            "touchstart" => Ok(EventName::TouchStart),
            "touchmove" => Ok(EventName::TouchMove),
            "touchend" => Ok(EventName::TouchEnd),
            "resize" => Ok(EventName::Resize),
            other => Err(InputError::UnknownEventName(other.to_string())),
        }
    }
}

/// A raw pointer event in client (screen) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Pointer position for mouse events.
    pub position: Vec2,
    /// Active contact points for touch events, in contact order.
    pub touches: SmallVec<[Vec2; 2]>,
    default_prevented: bool,
}

impl PointerEvent {
    pub fn mouse(position: Vec2) -> Self {
        Self {
            position,
            touches: SmallVec::new(),
            default_prevented: false,
        }
    }

    /// Touch event with the given contacts. `position` mirrors the first one.
    pub fn touch(touches: impl IntoIterator<Item = Vec2>) -> Self {
        let touches: SmallVec<[Vec2; 2]> = touches.into_iter().collect();
        Self {
            position: touches.first().copied().unwrap_or(Vec2::ZERO),
            touches,
            default_prevented: false,
        }
    }

    /// The single logical pointer: the first contact when touches are
    /// present, the pointer position otherwise. Further contacts are ignored.
    pub fn primary_position(&self) -> Vec2 {
        self.touches.first().copied().unwrap_or(self.position)
    }

    /// Suppress the host's default action (native drag, text selection, scrolling).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Events delivered by the host to a drag controller.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer event fired under `name`.
    Pointer {
        name: EventName,
        event: PointerEvent,
    },
    /// Host surface resized.
    Resize,
    /// A timer scheduled through the host window fired.
    Timer(TimerId),
}

impl InputEvent {
    pub fn pointer(name: EventName, event: PointerEvent) -> Self {
        InputEvent::Pointer { name, event }
    }

    /// Event name, or `None` for timer callbacks.
    pub fn name(&self) -> Option<EventName> {
        match self {
            InputEvent::Pointer { name, .. } => Some(*name),
            InputEvent::Resize => Some(EventName::Resize),
            InputEvent::Timer(_) => None,
        }
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

/// Event queue with coalescing.
///
/// Consecutive moves under the same name collapse into the latest one and
/// repeated resizes collapse into one. Ordering between different events is
/// preserved, so a move is never reordered past the release that follows it.
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
    stats: EventStats,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            stats: EventStats::default(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.stats.events_received += 1;

        if event == InputEvent::Resize && self.pending.contains(&InputEvent::Resize) {
            self.stats.events_dropped += 1;
            return;
        }

        let coalesce = match (&event, self.pending.back()) {
            (
                InputEvent::Pointer { name, .. },
                Some(InputEvent::Pointer { name: last, .. }),
            ) => name.is_move() && name == last,
            _ => false,
        };
        if coalesce {
            self.pending.pop_back();
            self.stats.events_dropped += 1;
        }
        self.pending.push_back(event);
    }

    /// Take every queued event as a batch.
    pub fn drain(&mut self) -> EventBatch {
        let events: Vec<InputEvent> = self.pending.drain(..).collect();

        self.stats.events_processed += events.len();

        EventBatch { events }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn stats(&self) -> &EventStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = EventStats::default();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub struct EventBatch {
    events: Vec<InputEvent>,
}

impl EventBatch {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Run `handler` over every event in order, dropping consumed ones.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&mut InputEvent) -> HandleStatus,
    {
        self.events.retain_mut(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

#[derive(Default, Debug, Clone)]
pub struct EventStats {
    pub events_received: usize,
    pub events_processed: usize,
    pub events_dropped: usize,
}
