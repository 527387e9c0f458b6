//! Screen-space math for pointer dragging.
//!
//! Positions are [`Vec2`] values from [`glam`] with `x` as the left
//! coordinate and `y` as the top coordinate, matching CSS `left`/`top`.
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, vec2};

/// Build a point from `top`/`left` components, in that order.
#[inline]
pub fn top_left(top: f32, left: f32) -> Vec2 {
    Vec2::new(left, top)
}

/// Axis-aligned bounds restricting where an element may be placed.
///
/// Bounds are in the same frame as the element's local position.
///
/// # Examples
///
/// ```
/// use grapple_core::math::{Constraints, Vec2};
///
/// let c = Constraints::from_array([0.0, 100.0, 0.0, 200.0]);
/// assert_eq!(c.clamp(Vec2::new(250.0, -5.0)), Vec2::new(200.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub top_min: f32,
    pub top_max: f32,
    pub left_min: f32,
    pub left_max: f32,
}

impl Constraints {
    pub const fn new(top_min: f32, top_max: f32, left_min: f32, left_max: f32) -> Self {
        Self {
            top_min,
            top_max,
            left_min,
            left_max,
        }
    }

    /// Create constraints from `[top_min, top_max, left_min, left_max]`.
    pub const fn from_array([top_min, top_max, left_min, left_max]: [f32; 4]) -> Self {
        Self::new(top_min, top_max, left_min, left_max)
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.top_min, self.top_max, self.left_min, self.left_max]
    }

    /// Clamp each axis independently. The minimum is applied before the
    /// maximum, so an inverted pair always yields the maximum.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(point.x, self.left_min, self.left_max),
            clamp_axis(point.y, self.top_min, self.top_max),
        )
    }

    /// Extent of each axis as `(left span, top span)` in a [`Vec2`].
    ///
    /// Spans may be zero or negative.
    pub fn span(&self) -> Vec2 {
        Vec2::new(
            self.left_max - self.left_min,
            self.top_max - self.top_min,
        )
    }

    /// Shift every bound by `by`.
    pub fn translated(&self, by: Vec2) -> Self {
        Self {
            top_min: self.top_min + by.y,
            top_max: self.top_max + by.y,
            left_min: self.left_min + by.x,
            left_max: self.left_max + by.x,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<[f32; 4]> for Constraints {
    fn from(bounds: [f32; 4]) -> Self {
        Self::from_array(bounds)
    }
}

// Not `f32::clamp`: that panics when min > max.
#[inline]
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    let mut value = value;
    if value < min {
        value = min;
    }
    if value > max {
        value = max;
    }
    value
}
