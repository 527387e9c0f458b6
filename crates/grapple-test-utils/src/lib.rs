//! Test utilities for Grapple.
//!
//! Mock hosts for driving a drag controller without a real UI runtime.
//!
//! # Overview
//!
//! - [`MockElement`] - element with a simple layout model that records
//!   placements, notifications and listeners
//! - [`MockWindow`] - window with a manual clock for timers and a listener registry
//! - [`events`] - constructors for pointer and resize events
//!
//! Both mocks are cheap handles over shared state: clone one, give the clone
//! to the controller, and inspect the original from the test.
//!
//! # Example
//!
//! ```rust
//! use grapple_input::{HostElement, Placement};
//! use grapple_core::math::Vec2;
//! use grapple_test_utils::MockElement;
//!
//! let element = MockElement::in_frame(Vec2::new(100.0, 50.0), Vec2::new(10.0, 10.0));
//! let mut handle = element.clone();
//! handle.apply(Placement::Translate { offset: Vec2::new(5.0, 0.0), accelerated: false });
//!
//! assert_eq!(element.offset(), Vec2::new(115.0, 60.0));
//! assert_eq!(element.placements().len(), 1);
//! ```

pub mod events;
pub mod mock_element;
pub mod mock_window;

pub use mock_element::MockElement;
pub use mock_window::MockWindow;
