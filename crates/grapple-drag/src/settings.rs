//! Controller configuration.

use std::time::Duration;

use grapple_core::math::Constraints;
use grapple_input::DragMethod;

use crate::controller::ResizeContext;
use crate::error::{DragError, DragResult};
use crate::strategy::{MoveFrame, MoveStrategy, Positioning, TranslateMode};

/// Caller hook run when the host surface resizes.
///
/// Receives the element and a [`ResizeContext`] that can recalibrate the origin.
pub type ResizeHandler<E> = Box<dyn FnMut(&mut E, &mut ResizeContext<'_>)>;

/// Caller-supplied touch capability probe.
pub type TouchDetect = Box<dyn Fn() -> bool>;

/// How resize signals are turned into recalibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Recompute the origin and run the handler on every signal.
    Immediate,
    /// Run the handler once, `interval` after the first signal of a burst.
    Debounced(Duration),
}

/// Configuration for a [`DragController`](crate::DragController).
///
/// # Example
///
/// ```
/// use grapple_drag::DragSettings;
/// use grapple_test_utils::MockElement;
///
/// let settings = DragSettings::<MockElement>::default()
///     .threshold(5.0)
///     .constraints([0.0, 100.0, 0.0, 200.0])
///     .translate(false);
/// assert_eq!(settings.threshold, 5.0);
/// ```
pub struct DragSettings<E> {
    /// Chebyshev distance a press must exceed before it becomes a drag.
    pub threshold: f32,
    /// Translate (`true`) or absolute (`false`) positioning.
    pub translate: bool,
    pub translate_mode: TranslateMode,
    /// Overrides the built-in strategy when set.
    pub move_function: Option<Box<dyn MoveStrategy<E>>>,
    pub drag_method: DragMethod,
    /// Overrides the host window's touch probe when set.
    pub touch_detect: Option<TouchDetect>,
    /// `[top_min, top_max, left_min, left_max]`; unconstrained when `None`.
    pub constraints: Option<Constraints>,
    /// No resize listener is attached when `None`.
    pub resize: Option<ResizeHandler<E>>,
    /// `None` or zero selects [`ResizePolicy::Immediate`].
    pub resize_interval: Option<Duration>,
}

impl<E> DragSettings<E> {
    pub const DEFAULT_THRESHOLD: f32 = 3.0;
    pub const DEFAULT_RESIZE_INTERVAL: Duration = Duration::from_millis(50);

    pub fn new() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            translate: true,
            translate_mode: TranslateMode::default(),
            move_function: None,
            drag_method: DragMethod::Auto,
            touch_detect: None,
            constraints: None,
            resize: None,
            resize_interval: Some(Self::DEFAULT_RESIZE_INTERVAL),
        }
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn translate(mut self, translate: bool) -> Self {
        self.translate = translate;
        self
    }

    pub fn translate_mode(mut self, mode: TranslateMode) -> Self {
        self.translate_mode = mode;
        self
    }

    pub fn move_function<S>(mut self, strategy: S) -> Self
    where
        S: MoveStrategy<E> + 'static,
    {
        self.move_function = Some(Box::new(strategy));
        self
    }

    /// Closure form of [`move_function`](Self::move_function).
    pub fn move_with<F>(self, f: F) -> Self
    where
        F: FnMut(&mut E, &MoveFrame, grapple_core::math::Vec2) + 'static,
    {
        self.move_function(f)
    }

    pub fn drag_method(mut self, method: DragMethod) -> Self {
        self.drag_method = method;
        self
    }

    /// Parse the drag method from `auto`, `mouse` or `touch`.
    pub fn drag_method_named(self, name: &str) -> DragResult<Self> {
        Ok(self.drag_method(name.parse()?))
    }

    pub fn touch_detect<F>(mut self, probe: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.touch_detect = Some(Box::new(probe));
        self
    }

    pub fn constraints(mut self, constraints: impl Into<Constraints>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    pub fn on_resize<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut E, &mut ResizeContext<'_>) + 'static,
    {
        self.resize = Some(Box::new(handler));
        self
    }

    pub fn resize_interval(mut self, interval: Option<Duration>) -> Self {
        self.resize_interval = interval;
        self
    }

    pub fn positioning(&self) -> Positioning {
        if self.translate {
            Positioning::Translate(self.translate_mode)
        } else {
            Positioning::Absolute
        }
    }

    pub fn resize_policy(&self) -> ResizePolicy {
        match self.resize_interval {
            Some(interval) if !interval.is_zero() => ResizePolicy::Debounced(interval),
            _ => ResizePolicy::Immediate,
        }
    }

    pub fn validate(&self) -> DragResult<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(DragError::InvalidThreshold(self.threshold));
        }
        if let Some(constraints) = self.constraints {
            if !constraints.is_finite() {
                return Err(DragError::InvalidConstraints(constraints));
            }
        }
        Ok(())
    }
}

impl<E> Default for DragSettings<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for DragSettings<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSettings")
            .field("threshold", &self.threshold)
            .field("translate", &self.translate)
            .field("translate_mode", &self.translate_mode)
            .field("move_function", &self.move_function.is_some())
            .field("drag_method", &self.drag_method)
            .field("touch_detect", &self.touch_detect.is_some())
            .field("constraints", &self.constraints)
            .field("resize", &self.resize.is_some())
            .field("resize_interval", &self.resize_interval)
            .finish()
    }
}
