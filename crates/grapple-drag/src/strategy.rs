//! Positioning strategies.
//!
//! A strategy maps a pointer position to a repositioning effect on the
//! element. Two are built in ([`Translate`] and [`Absolute`]); any closure
//! `FnMut(&mut E, &MoveFrame, Vec2)` can be used as a custom one.

use grapple_core::math::{Constraints, Vec2};
use grapple_input::{HostElement, Placement};

use crate::geometry::constrain;

/// Reference data a strategy needs to turn a pointer into a local position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveFrame {
    /// Subtracted from the pointer to get the element's local position.
    pub offset: Vec2,
    pub constraints: Option<Constraints>,
}

impl MoveFrame {
    /// Constrained local position for `pointer`.
    pub fn target(&self, pointer: Vec2) -> Vec2 {
        constrain(self.constraints.as_ref(), pointer - self.offset)
    }
}

/// Moves an element to follow a pointer.
pub trait MoveStrategy<E> {
    fn apply(&mut self, element: &mut E, frame: &MoveFrame, pointer: Vec2);
}

impl<E, F> MoveStrategy<E> for F
where
    F: FnMut(&mut E, &MoveFrame, Vec2),
{
    fn apply(&mut self, element: &mut E, frame: &MoveFrame, pointer: Vec2) {
        self(element, frame, pointer)
    }
}

/// Form of the translation transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslateMode {
    /// `translate(x, y)`
    Plain,
    /// `translate3d(x, y, 0)`
    #[default]
    Accelerated,
}

/// How the element is placed, chosen once at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// Transform translation; layout flow is untouched.
    Translate(TranslateMode),
    /// `position: absolute` with top/left; leaves layout flow.
    Absolute,
}

impl Positioning {
    /// Screen position of the frame local positions are measured from.
    pub fn origin_of<E: HostElement>(&self, element: &E) -> Vec2 {
        match self {
            Positioning::Translate(_) => element.offset() - element.translation(),
            Positioning::Absolute => element.offset() - element.position(),
        }
    }

    /// Built-in strategy for this positioning.
    pub fn strategy<E: HostElement>(&self) -> Box<dyn MoveStrategy<E>> {
        match *self {
            Positioning::Translate(mode) => Box::new(Translate { mode }),
            Positioning::Absolute => Box::new(Absolute),
        }
    }
}

/// Shifts the element with a 2D translation transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translate {
    pub mode: TranslateMode,
}

impl<E: HostElement> MoveStrategy<E> for Translate {
    fn apply(&mut self, element: &mut E, frame: &MoveFrame, pointer: Vec2) {
        element.apply(Placement::Translate {
            offset: frame.target(pointer),
            accelerated: self.mode == TranslateMode::Accelerated,
        });
    }
}

/// Places the element with absolute top/left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absolute;

impl<E: HostElement> MoveStrategy<E> for Absolute {
    fn apply(&mut self, element: &mut E, frame: &MoveFrame, pointer: Vec2) {
        element.apply(Placement::Absolute {
            top_left: frame.target(pointer),
        });
    }
}
