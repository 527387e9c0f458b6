//! The drag state machine.

use grapple_core::math::Vec2;
use grapple_core::profiling::profile_function;
use grapple_input::{
    DragEvents, DragNotification, EventName, EventTarget, HandleStatus, HostElement, HostWindow,
    InputEvent, ListenerId, NotificationKind, PointerEvent, TimerId,
};

use crate::error::DragResult;
use crate::geometry::DragGeometry;
use crate::settings::{DragSettings, ResizeHandler, ResizePolicy};
use crate::strategy::{MoveStrategy, Positioning};

/// Where a controller is in its press/drag cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pressed, threshold not yet exceeded.
    Armed,
    /// Threshold exceeded and `dragstart` fired.
    Dragging,
}

/// Window listeners bound for the duration of one press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SessionListeners {
    moved: ListenerId,
    end: ListenerId,
}

/// Handed to a resize handler alongside the element.
///
/// Debounced resizes leave the origin alone; a handler that wants local
/// coordinates to follow the new layout calls [`recalibrate`](Self::recalibrate).
pub struct ResizeContext<'a> {
    positioning: Positioning,
    geometry: &'a mut DragGeometry,
}

impl<'a> ResizeContext<'a> {
    fn new(positioning: Positioning, geometry: &'a mut DragGeometry) -> Self {
        Self {
            positioning,
            geometry,
        }
    }

    /// Recompute the origin from `element`'s current layout.
    pub fn recalibrate<E: HostElement>(&mut self, element: &E) {
        let origin = self.positioning.origin_of(element);
        tracing::debug!(old = ?self.geometry.origin, new = ?origin, "origin recalibrated");
        self.geometry.origin = origin;
    }

    pub fn origin(&self) -> Vec2 {
        self.geometry.origin
    }
}

/// Per-element drag controller.
///
/// Holds host handles for the element and the surrounding window; it never
/// owns the underlying objects. Events are fed in through [`handle`](Self::handle)
/// or the individual `pointer_*` methods.
pub struct DragController<E: HostElement, W: HostWindow> {
    element: E,
    window: W,
    threshold: f32,
    positioning: Positioning,
    events: DragEvents,
    mover: Box<dyn MoveStrategy<E>>,
    geometry: DragGeometry,
    state: DragState,
    start_listener: ListenerId,
    session: Option<SessionListeners>,
    resize_handler: Option<ResizeHandler<E>>,
    resize_listener: Option<ListenerId>,
    resize_policy: ResizePolicy,
    pending_resize: Option<TimerId>,
}

impl<E: HostElement, W: HostWindow> DragController<E, W> {
    /// Resolve `settings` against the host and start listening for presses.
    pub fn attach(mut element: E, mut window: W, settings: DragSettings<E>) -> DragResult<Self> {
        settings.validate()?;

        let positioning = settings.positioning();
        let resize_policy = settings.resize_policy();
        let DragSettings {
            threshold,
            move_function,
            drag_method,
            touch_detect,
            mut constraints,
            resize,
            ..
        } = settings;

        if positioning == Positioning::Absolute {
            let local = element.position();
            constraints = constraints.map(|c| c.translated(local));
        }
        let origin = positioning.origin_of(&element);

        let mover = move_function.unwrap_or_else(|| positioning.strategy());

        let events = match touch_detect {
            Some(probe) => drag_method.resolve(|| probe()),
            None => drag_method.resolve(|| window.supports_touch()),
        };

        let start_listener = element.listen(events.start);
        let resize_listener = resize.as_ref().map(|_| window.listen(EventName::Resize));

        tracing::debug!(
            ?positioning,
            ?events,
            threshold,
            ?constraints,
            ?origin,
            "drag controller attached"
        );

        Ok(Self {
            element,
            window,
            threshold,
            positioning,
            events,
            mover,
            geometry: DragGeometry::new(origin, constraints),
            state: DragState::Idle,
            start_listener,
            session: None,
            resize_handler: resize,
            resize_listener,
            resize_policy,
            pending_resize: None,
        })
    }

    /// Release every listener this controller holds and hand back the host handles.
    pub fn detach(mut self) -> (E, W) {
        self.unbind_session();
        self.element.unlisten(self.start_listener);
        if let Some(id) = self.resize_listener.take() {
            self.window.unlisten(id);
        }
        tracing::debug!("drag controller detached");
        (self.element, self.window)
    }

    /// Route a host event to the matching handler.
    pub fn handle(&mut self, event: &mut InputEvent) -> HandleStatus {
        match event {
            InputEvent::Pointer { name, event } if *name == self.events.start => {
                self.pointer_down(event);
                HandleStatus::consumed()
            }
            InputEvent::Pointer { name, event }
                if *name == self.events.moved && self.session.is_some() =>
            {
                self.pointer_move(event);
                HandleStatus::handled()
            }
            InputEvent::Pointer { name, event }
                if *name == self.events.end && self.session.is_some() =>
            {
                self.pointer_up(event);
                HandleStatus::handled()
            }
            InputEvent::Resize if self.resize_handler.is_some() => {
                self.on_resize();
                HandleStatus::handled()
            }
            InputEvent::Timer(id) if self.pending_resize == Some(*id) => {
                self.on_resize_timer(*id);
                HandleStatus::consumed()
            }
            _ => HandleStatus::ignored(),
        }
    }

    /// Press: record the reference points and bind move/up on the window.
    ///
    /// A press while a session is already bound re-anchors Offset and
    /// DeltaOrigin at the new pointer, so later deltas (and the one reported
    /// with `dragend`) are measured from this press, not the first one.
    pub fn pointer_down(&mut self, event: &mut PointerEvent) {
        profile_function!();
        event.prevent_default();

        let pointer = event.primary_position();
        self.geometry.begin(pointer, self.element.offset());

        if self.session.is_some() {
            tracing::warn!("pointer down while a press is active, keeping existing listeners");
        } else {
            self.session = Some(SessionListeners {
                moved: self.window.listen(self.events.moved),
                end: self.window.listen(self.events.end),
            });
        }

        if self.state == DragState::Idle {
            self.state = DragState::Armed;
        }
        tracing::debug!(?pointer, offset = ?self.geometry.offset, "drag armed");
    }

    /// Move: promote to a drag past the threshold, then reposition.
    ///
    /// Returns `false` when the element was not moved.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        profile_function!();
        if self.state == DragState::Idle {
            return false;
        }

        let pointer = event.primary_position();
        self.geometry.track(pointer);

        if self.state == DragState::Armed {
            let distance = self.geometry.delta.abs().max_element();
            if distance <= self.threshold {
                return false;
            }
            self.state = DragState::Dragging;
            tracing::debug!(delta = ?self.geometry.delta, "drag started");
            self.notify(NotificationKind::DragStart);
        }

        let frame = self.geometry.frame();
        self.mover.apply(&mut self.element, &frame, pointer);
        tracing::trace!(delta = ?self.geometry.delta, percent = ?self.geometry.percent, "drag move");
        self.notify(NotificationKind::DragMove);
        true
    }

    /// Release: unbind the session and finish the drag if one started.
    pub fn pointer_up(&mut self, _event: &PointerEvent) {
        profile_function!();
        self.unbind_session();

        if self.state == DragState::Dragging {
            tracing::debug!(delta = ?self.geometry.delta, "drag ended");
            self.notify(NotificationKind::DragEnd);
        }
        self.state = DragState::Idle;
    }

    /// Host surface resized.
    pub fn on_resize(&mut self) {
        if self.resize_handler.is_none() {
            return;
        }

        match self.resize_policy {
            ResizePolicy::Debounced(interval) => {
                if self.pending_resize.is_none() {
                    self.pending_resize = Some(self.window.set_timeout(interval));
                    tracing::debug!(?interval, "resize recalculation scheduled");
                }
            }
            ResizePolicy::Immediate => {
                self.recalibrate();
                self.run_resize_handler();
            }
        }
    }

    /// Debounce timer fired. Returns `false` for timers this controller did not schedule.
    pub fn on_resize_timer(&mut self, id: TimerId) -> bool {
        if self.pending_resize != Some(id) {
            return false;
        }
        self.pending_resize = None;
        self.run_resize_handler();
        true
    }

    /// Recompute the origin from the element's current layout.
    pub fn recalibrate(&mut self) {
        ResizeContext::new(self.positioning, &mut self.geometry).recalibrate(&self.element);
    }

    /// Move to local `(x, y)` through the active strategy.
    pub fn set_position(&mut self, x: f32, y: f32) {
        let pointer = self.geometry.origin + Vec2::new(x, y);
        let frame = self.geometry.rest_frame();
        self.mover.apply(&mut self.element, &frame, pointer);
    }

    /// Current local position, the inverse of [`set_position`](Self::set_position).
    pub fn get_position(&self) -> Vec2 {
        self.element.offset() - self.geometry.origin
    }

    /// Current phase of the press/drag cycle.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether the threshold has been exceeded for the current press.
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Constrained distance from the press, as last reported.
    pub fn delta(&self) -> Vec2 {
        self.geometry.delta
    }

    /// Delta over the constraint span, per axis.
    pub fn percent(&self) -> Vec2 {
        self.geometry.percent
    }

    /// Reference point local coordinates are measured from.
    pub fn origin(&self) -> Vec2 {
        self.geometry.origin
    }

    /// Element offset captured at the last press.
    pub fn offset(&self) -> Vec2 {
        self.geometry.offset
    }

    /// All reference points and derived values.
    pub fn geometry(&self) -> &DragGeometry {
        &self.geometry
    }

    /// Distance a press must exceed before it becomes a drag.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Built-in positioning mode resolved at attach.
    pub fn positioning(&self) -> Positioning {
        self.positioning
    }

    /// Start/move/end event names resolved at attach.
    pub fn events(&self) -> DragEvents {
        self.events
    }

    /// How resize signals are handled.
    pub fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }

    /// Whether a debounce timer is outstanding.
    pub fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_some()
    }

    /// The host element handle.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// The host window handle.
    pub fn window(&self) -> &W {
        &self.window
    }

    fn unbind_session(&mut self) {
        if let Some(session) = self.session.take() {
            self.window.unlisten(session.moved);
            self.window.unlisten(session.end);
        }
    }

    fn run_resize_handler(&mut self) {
        if let Some(handler) = self.resize_handler.as_mut() {
            let mut ctx = ResizeContext::new(self.positioning, &mut self.geometry);
            handler(&mut self.element, &mut ctx);
        }
    }

    fn notify(&mut self, kind: NotificationKind) {
        self.element.trigger(DragNotification {
            kind,
            delta: self.geometry.delta,
            percent: self.geometry.percent,
        });
    }
}

impl<E: HostElement, W: HostWindow> std::fmt::Debug for DragController<E, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("state", &self.state)
            .field("threshold", &self.threshold)
            .field("positioning", &self.positioning)
            .field("events", &self.events)
            .field("geometry", &self.geometry)
            .field("session", &self.session)
            .field("resize_policy", &self.resize_policy)
            .field("pending_resize", &self.pending_resize)
            .finish_non_exhaustive()
    }
}
