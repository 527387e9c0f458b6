//! Grapple - pointer-driven dragging
//!
//! Grapple converts raw mouse and touch events into a positioned element.
//! It is host-agnostic: the runtime implements [`HostElement`] and
//! [`HostWindow`] and feeds events into a [`DragController`].
//!
//! - **Threshold**: a press only becomes a drag once the pointer moves
//!   further than the threshold, so clicks never emit drag notifications
//! - **Constraints**: optional axis-aligned bounds, with the position
//!   reported as a fraction of the constraint span
//! - **Positioning**: transform translation (default), absolute top/left,
//!   or a caller-supplied strategy
//! - **Resize**: origin recalibration on host resize, optionally debounced
//!
//! # Quick Start
//!
//! ```
//! use grapple::prelude::*;
//! use grapple_test_utils::events::{mouse_down, mouse_move, mouse_up};
//! use grapple_test_utils::{MockElement, MockWindow};
//!
//! let element = MockElement::new();
//! let mut drag = attach(
//!     element.clone(),
//!     MockWindow::new(),
//!     DragSettings::default()
//!         .drag_method(DragMethod::Mouse)
//!         .constraints([0.0, 100.0, 0.0, 200.0]),
//! )
//! .unwrap();
//!
//! let mut batch = EventBatch::new(vec![
//!     mouse_down(50.0, 50.0),
//!     mouse_move(54.0, 50.0),
//!     mouse_move(60.0, 50.0),
//!     mouse_up(60.0, 50.0),
//! ]);
//! batch.dispatch(|event| drag.handle(event));
//!
//! assert_eq!(drag.get_position(), Vec2::new(10.0, 0.0));
//! ```

pub use grapple_core as core;
pub use grapple_core::math;
pub use grapple_drag as drag;
pub use grapple_input as input;

pub use grapple_drag::{
    DragController, DragError, DragResult, DragSettings, DragState, MoveFrame, MoveStrategy,
    Positioning, ResizeContext, ResizePolicy, TranslateMode,
};
pub use grapple_input::{
    DragMethod, DragNotification, EventBatch, EventName, EventQueue, HandleStatus, HostElement,
    HostWindow, InputEvent, NotificationKind, Placement, PointerEvent,
};

/// Build a controller for one element and start listening for presses.
pub fn attach<E, W>(element: E, window: W, settings: DragSettings<E>) -> DragResult<DragController<E, W>>
where
    E: HostElement,
    W: HostWindow,
{
    DragController::attach(element, window, settings)
}

/// Attach a controller to each element, sharing one window handle type.
///
/// `settings` is called once per element since settings own their callbacks.
pub fn attach_each<E, W, I, S>(elements: I, window: W, mut settings: S) -> DragResult<Vec<DragController<E, W>>>
where
    E: HostElement,
    W: HostWindow + Clone,
    I: IntoIterator<Item = E>,
    S: FnMut() -> DragSettings<E>,
{
    let controllers = elements
        .into_iter()
        .map(|element| DragController::attach(element, window.clone(), settings()))
        .collect::<DragResult<Vec<_>>>()?;
    tracing::debug!(count = controllers.len(), "attached drag controllers");
    Ok(controllers)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{attach, attach_each};
    pub use grapple_core::math::{Constraints, Vec2};
    pub use grapple_drag::{
        DragController, DragError, DragSettings, DragState, MoveFrame, Positioning, ResizeContext,
        ResizePolicy, TranslateMode,
    };
    pub use grapple_input::{
        DragMethod, DragNotification, EventBatch, EventName, EventQueue, HandleStatus, HostElement,
        HostWindow, InputEvent, NotificationKind, Placement, PointerEvent,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use grapple_test_utils::events::{mouse_down, mouse_move, mouse_up};
    use grapple_test_utils::{MockElement, MockWindow};

    #[test]
    fn test_attach_each() {
        let elements = [MockElement::new(), MockElement::new(), MockElement::new()];
        let window = MockWindow::new();
        let controllers = attach_each(elements.iter().cloned(), window.clone(), || {
            DragSettings::default().drag_method(DragMethod::Mouse)
        })
        .unwrap();

        assert_eq!(controllers.len(), 3);
        for element in &elements {
            assert_eq!(element.listeners(), vec![EventName::MouseDown]);
        }
    }

    #[test]
    fn test_attach_each_stops_on_error() {
        let err = attach_each([MockElement::new()], MockWindow::new(), || {
            DragSettings::default().threshold(f32::NAN)
        })
        .unwrap_err();
        assert!(matches!(err, DragError::InvalidThreshold(_)));
    }

    #[test]
    fn test_queue_into_controller() {
        let element = MockElement::new();
        let mut drag = attach(
            element.clone(),
            MockWindow::new(),
            DragSettings::default().drag_method(DragMethod::Mouse),
        )
        .unwrap();

        let mut queue = EventQueue::new();
        queue.push(mouse_down(0.0, 0.0));
        queue.push(mouse_move(2.0, 0.0));
        queue.push(mouse_move(8.0, 0.0));
        queue.push(mouse_move(12.0, 6.0));
        queue.push(mouse_up(12.0, 6.0));

        let mut batch = queue.drain();
        assert_eq!(batch.len(), 3);
        batch.dispatch(|event| drag.handle(event));

        // Press is consumed; move and release stay visible to other handlers.
        assert_eq!(batch.len(), 2);
        assert_eq!(drag.get_position(), Vec2::new(12.0, 6.0));
        assert_eq!(
            element.notification_kinds(),
            vec![
                NotificationKind::DragStart,
                NotificationKind::DragMove,
                NotificationKind::DragEnd
            ]
        );
    }
}
