/// Errors produced while parsing input configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Drag method string was not `auto`, `mouse` or `touch`.
    UnknownDragMethod(String),
    /// Event name string does not name a pointer or resize event.
    UnknownEventName(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::UnknownDragMethod(value) => {
                write!(f, "Unknown drag method '{}' (expected auto, mouse or touch)", value)
            }
            InputError::UnknownEventName(value) => write!(f, "Unknown event name '{}'", value),
        }
    }
}

impl std::error::Error for InputError {}
