//! Grapple Input
//!
//! Pointer events and the host-facing seams a drag controller talks to:
//!
//! - [`EventName`] / [`PointerEvent`] / [`InputEvent`] describe what the host delivers
//! - [`DragMethod`] resolves to a static [`DragEvents`] set once at setup
//! - [`EventTarget`], [`HostElement`] and [`HostWindow`] are implemented by the host
//! - [`EventQueue`] / [`EventBatch`] batch events for dispatch

pub mod error;
pub mod event;
pub mod host;
pub mod method;

pub use error::InputError;
pub use event::{
    EventBatch, EventName, EventQueue, HandleStatus, InputEvent, ListenerId, PointerEvent, TimerId,
};
pub use host::{DragNotification, EventTarget, HostElement, HostWindow, NotificationKind, Placement};
pub use method::{DragEvents, DragMethod};
