//! Mock implementation of [`HostWindow`] with a manual clock.

use std::sync::Arc;
use std::time::Duration;

use grapple_core::alloc::HashMap;
use grapple_input::{EventName, EventTarget, HostWindow, InputEvent, ListenerId, TimerId};
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    id: TimerId,
    due: Duration,
}

#[derive(Debug, Default)]
struct WindowState {
    touch: bool,
    now: Duration,
    timers: Vec<Timer>,
    next_timer: u64,
    listeners: HashMap<ListenerId, EventName>,
    next_listener: u64,
}

/// Window whose time only moves through [`advance`](MockWindow::advance).
#[derive(Debug, Clone, Default)]
pub struct MockWindow {
    state: Arc<Mutex<WindowState>>,
}

impl MockWindow {
    /// Mouse-only window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Window whose touch probe reports support.
    pub fn touch() -> Self {
        let window = Self::new();
        window.state.lock().touch = true;
        window
    }

    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Advance the clock and return timer events that came due, in due order.
    pub fn advance(&self, by: Duration) -> Vec<InputEvent> {
        let mut state = self.state.lock();
        state.now += by;
        let now = state.now;

        let mut due: Vec<Timer> = state.timers.iter().copied().filter(|t| t.due <= now).collect();
        state.timers.retain(|t| t.due > now);
        due.sort_by_key(|t| (t.due, t.id));

        due.into_iter().map(|t| InputEvent::Timer(t.id)).collect()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.lock().timers.len()
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.state.lock().timers.iter().map(|t| t.due).min()
    }

    /// Number of live listeners for `name`.
    pub fn listeners_for(&self, name: EventName) -> usize {
        self.state
            .lock()
            .listeners
            .values()
            .filter(|&&n| n == name)
            .count()
    }

    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }
}

impl EventTarget for MockWindow {
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

impl HostWindow for MockWindow {
    fn supports_touch(&self) -> bool {
        self.state.lock().touch
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        let mut state = self.state.lock();
        state.next_timer += 1;
        let id = TimerId(state.next_timer);
        let due = state.now + delay;
        state.timers.push(Timer { id, due });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timers_fire_when_due() {
        let mut window = MockWindow::new();
        let a = window.set_timeout(Duration::from_millis(50));
        let b = window.set_timeout(Duration::from_millis(20));

        assert!(window.advance(Duration::from_millis(10)).is_empty());
        assert_eq!(window.advance(Duration::from_millis(10)), vec![InputEvent::Timer(b)]);
        assert_eq!(window.advance(Duration::from_millis(100)), vec![InputEvent::Timer(a)]);
        assert_eq!(window.pending_timers(), 0);
    }

    #[test]
    fn test_touch_probe() {
        assert!(!MockWindow::new().supports_touch());
        assert!(MockWindow::touch().supports_touch());
    }
}
