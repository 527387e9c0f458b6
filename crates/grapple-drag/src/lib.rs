//! Grapple Drag
//!
//! Turns raw pointer events into a positioned element:
//!
//! - A press arms the controller and binds move/up listeners on the window
//! - Movement past a threshold (Chebyshev distance) starts the drag and fires `dragstart`
//! - Each further move repositions the element through a [`MoveStrategy`] and fires `dragmove`
//! - Release unbinds the listeners and fires `dragend` if a drag started
//!
//! Positions can be clamped with [`Constraints`](grapple_core::math::Constraints),
//! and the reported percent is the constrained position over the constraint span.
//!
//! ## Quick Start
//!
//! ```
//! use grapple_drag::{DragController, DragSettings};
//! use grapple_input::{EventName, InputEvent, PointerEvent};
//! use grapple_core::math::Vec2;
//! use grapple_test_utils::{MockElement, MockWindow};
//!
//! let element = MockElement::new();
//! let settings = DragSettings::default()
//!     .drag_method(grapple_input::DragMethod::Mouse)
//!     .constraints([0.0, 100.0, 0.0, 200.0]);
//! let mut drag = DragController::attach(element.clone(), MockWindow::new(), settings).unwrap();
//!
//! for (name, x, y) in [
//!     (EventName::MouseDown, 50.0, 50.0),
//!     (EventName::MouseMove, 60.0, 50.0),
//!     (EventName::MouseUp, 60.0, 50.0),
//! ] {
//!     drag.handle(&mut InputEvent::pointer(name, PointerEvent::mouse(Vec2::new(x, y))));
//! }
//! assert_eq!(drag.get_position(), Vec2::new(10.0, 0.0));
//! ```

pub mod controller;
pub mod error;
pub mod geometry;
pub mod settings;
pub mod strategy;

pub use controller::{DragController, DragState, ResizeContext};
pub use error::{DragError, DragResult};
pub use geometry::DragGeometry;
pub use settings::{DragSettings, ResizeHandler, ResizePolicy, TouchDetect};
pub use strategy::{Absolute, MoveFrame, MoveStrategy, Positioning, Translate, TranslateMode};
