//! Mouse vs touch selection.

use std::str::FromStr;

use crate::error::InputError;
use crate::event::EventName;

/// Which family of pointer events drives dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMethod {
    /// Probe the host for touch support once at setup.
    #[default]
    Auto,
    Mouse,
    Touch,
}

impl DragMethod {
    /// Resolve to a concrete event set. `touch_detect` only runs for [`DragMethod::Auto`].
    pub fn resolve(self, touch_detect: impl FnOnce() -> bool) -> DragEvents {
        match self {
            DragMethod::Mouse => DragEvents::MOUSE,
            DragMethod::Touch => DragEvents::TOUCH,
            DragMethod::Auto => {
                if touch_detect() {
                    DragEvents::TOUCH
                } else {
                    DragEvents::MOUSE
                }
            }
        }
    }
}

impl FromStr for DragMethod {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(DragMethod::Auto),
            "mouse" => Ok(DragMethod::Mouse),
            "touch" => Ok(DragMethod::Touch),
            other => Err(InputError::UnknownDragMethod(other.to_string())),
        }
    }
}

/// Start/move/end event names for one input family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEvents {
    pub start: EventName,
    pub moved: EventName,
    pub end: EventName,
}

impl DragEvents {
    pub const MOUSE: Self = Self {
        start: EventName::MouseDown,
        moved: EventName::MouseMove,
        end: EventName::MouseUp,
    };

    pub const TOUCH: Self = Self {
        start: EventName::TouchStart,
        moved: EventName::TouchMove,
        end: EventName::TouchEnd,
    };

    pub fn is_touch(&self) -> bool {
        self.start.is_touch()
    }
}
