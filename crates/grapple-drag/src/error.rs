use grapple_core::math::Constraints;
use grapple_input::InputError;

/// Errors raised while building a drag controller.
///
/// Runtime event handling never fails; stray or unexpected events are
/// ignored instead.
#[derive(Debug, Clone, PartialEq)]
pub enum DragError {
    /// Threshold is negative or not finite.
    InvalidThreshold(f32),
    /// A constraint bound is not finite.
    InvalidConstraints(Constraints),
    /// Input configuration could not be parsed.
    Input(InputError),
}

impl std::fmt::Display for DragError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragError::InvalidThreshold(value) => {
                write!(f, "Drag threshold must be finite and non-negative, got {}", value)
            }
            DragError::InvalidConstraints(c) => write!(
                f,
                "Constraint bounds must be finite, got [{}, {}, {}, {}]",
                c.top_min, c.top_max, c.left_min, c.left_max
            ),
            DragError::Input(err) => write!(f, "Invalid input configuration: {}", err),
        }
    }
}

impl std::error::Error for DragError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DragError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InputError> for DragError {
    fn from(err: InputError) -> Self {
        DragError::Input(err)
    }
}

/// Result type for drag controller construction.
pub type DragResult<T> = Result<T, DragError>;
