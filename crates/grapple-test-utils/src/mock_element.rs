//! Mock implementation of [`HostElement`].

use std::sync::Arc;

use grapple_core::alloc::HashMap;
use grapple_core::math::Vec2;
use grapple_input::{
    DragNotification, EventName, EventTarget, HostElement, ListenerId, NotificationKind, Placement,
};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct ElementState {
    /// Screen position of the containing frame.
    frame: Vec2,
    /// Local position of the element's layout slot within the frame.
    local: Vec2,
    /// Local position once absolutely positioned.
    absolute: Option<Vec2>,
    translation: Vec2,
    placements: Vec<Placement>,
    notifications: Vec<DragNotification>,
    listeners: HashMap<ListenerId, EventName>,
    next_listener: u64,
}

/// Element with a minimal layout model.
///
/// Rendered offset is `frame + local + translation`, where `local` is the
/// absolute position once one has been applied.
#[derive(Debug, Clone, Default)]
pub struct MockElement {
    state: Arc<Mutex<ElementState>>,
}

impl MockElement {
    /// Element at the screen origin with no transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Element at `local` inside a frame whose screen position is `frame`.
    pub fn in_frame(frame: Vec2, local: Vec2) -> Self {
        let element = Self::new();
        {
            let mut state = element.state.lock();
            state.frame = frame;
            state.local = local;
        }
        element
    }

    /// Move the containing frame, as a host layout change would.
    pub fn set_frame(&self, frame: Vec2) {
        self.state.lock().frame = frame;
    }

    pub fn frame(&self) -> Vec2 {
        self.state.lock().frame
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.state.lock().placements.clone()
    }

    pub fn last_placement(&self) -> Option<Placement> {
        self.state.lock().placements.last().copied()
    }

    pub fn notifications(&self) -> Vec<DragNotification> {
        self.state.lock().notifications.clone()
    }

    pub fn notification_kinds(&self) -> Vec<NotificationKind> {
        self.state
            .lock()
            .notifications
            .iter()
            .map(|n| n.kind)
            .collect()
    }

    pub fn clear_records(&self) {
        let mut state = self.state.lock();
        state.placements.clear();
        state.notifications.clear();
    }

    /// Event name of each live listener, one entry per listener.
    pub fn listeners(&self) -> Vec<EventName> {
        self.state.lock().listeners.values().copied().collect()
    }

    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }
}

impl EventTarget for MockElement {
    fn listen(&mut self, name: EventName) -> ListenerId {
        let mut state = self.state.lock();
        state.next_listener += 1;
        let id = ListenerId(state.next_listener);
        state.listeners.insert(id, name);
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.state.lock().listeners.remove(&id);
    }
}

impl HostElement for MockElement {
    fn offset(&self) -> Vec2 {
        let state = self.state.lock();
        state.frame + state.absolute.unwrap_or(state.local) + state.translation
    }

    fn position(&self) -> Vec2 {
        self.offset() - self.state.lock().frame
    }

    fn translation(&self) -> Vec2 {
        self.state.lock().translation
    }

    fn apply(&mut self, placement: Placement) {
        let mut state = self.state.lock();
        match placement {
            Placement::Translate { offset, .. } => state.translation = offset,
            Placement::Absolute { top_left } => state.absolute = Some(top_left),
        }
        state.placements.push(placement);
    }

    fn trigger(&mut self, notification: DragNotification) {
        self.state.lock().notifications.push(notification);
    }
}
