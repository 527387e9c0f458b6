//! Coordinate bookkeeping for a drag session.
//!
//! All values are screen-space [`Vec2`]s with `x` = left and `y` = top.

use grapple_core::math::{Constraints, Vec2};

use crate::strategy::MoveFrame;

/// Clamp `point` into `constraints`, or return it unchanged without any.
#[inline]
pub fn constrain(constraints: Option<&Constraints>, point: Vec2) -> Vec2 {
    match constraints {
        Some(c) => c.clamp(point),
        None => point,
    }
}

/// Per-controller coordinate state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGeometry {
    /// Screen offset of the element's local coordinate frame.
    pub origin: Vec2,
    /// Pointer position at the most recent pointer-down.
    pub delta_origin: Vec2,
    /// Pointer position relative to the element's local position at pointer-down.
    pub offset: Vec2,
    /// Pointer displacement since pointer-down.
    pub delta: Vec2,
    /// Constrained local position divided by the constraint span.
    pub percent: Vec2,
    pub constraints: Option<Constraints>,
}

impl DragGeometry {
    pub fn new(origin: Vec2, constraints: Option<Constraints>) -> Self {
        Self {
            origin,
            delta_origin: origin,
            offset: Vec2::ZERO,
            delta: Vec2::ZERO,
            percent: Vec2::ZERO,
            constraints,
        }
    }

    /// Record `pointer` as the delta origin and return the pointer's offset
    /// from the element's current local position.
    pub fn calculate_offset(&mut self, pointer: Vec2, element_offset: Vec2) -> Vec2 {
        self.delta_origin = pointer;
        pointer + self.origin - element_offset
    }

    pub fn calculate_delta(&self, pointer: Vec2) -> Vec2 {
        pointer - self.delta_origin
    }

    /// Zero without constraints. Axes with a non-positive span contribute zero.
    pub fn calculate_percent(&self, pointer: Vec2) -> Vec2 {
        let Some(constraints) = self.constraints.as_ref() else {
            return Vec2::ZERO;
        };

        let span = constraints.span();
        let pos = constraints.clamp(pointer - self.offset);

        Vec2::new(
            if span.x > 0.0 { pos.x / span.x } else { 0.0 },
            if span.y > 0.0 { pos.y / span.y } else { 0.0 },
        )
    }

    pub fn constrain(&self, point: Vec2) -> Vec2 {
        constrain(self.constraints.as_ref(), point)
    }

    /// Start a session at `pointer`: offset first, then delta and percent.
    pub fn begin(&mut self, pointer: Vec2, element_offset: Vec2) {
        self.offset = self.calculate_offset(pointer, element_offset);
        self.track(pointer);
    }

    /// Refresh delta and percent for a new pointer position.
    pub fn track(&mut self, pointer: Vec2) {
        self.delta = self.calculate_delta(pointer);
        self.percent = self.calculate_percent(pointer);
    }

    /// Frame for interactive moves.
    pub fn frame(&self) -> MoveFrame {
        MoveFrame {
            offset: self.offset,
            constraints: self.constraints,
        }
    }

    /// Frame for programmatic moves: points are expressed relative to the origin.
    pub fn rest_frame(&self) -> MoveFrame {
        MoveFrame {
            offset: self.origin,
            constraints: self.constraints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded() -> DragGeometry {
        DragGeometry::new(Vec2::ZERO, Some(Constraints::from_array([0.0, 100.0, 0.0, 200.0])))
    }

    #[test]
    fn test_offset_sets_delta_origin() {
        let mut g = DragGeometry::new(Vec2::new(10.0, 20.0), None);
        let offset = g.calculate_offset(Vec2::new(50.0, 60.0), Vec2::new(15.0, 25.0));

        assert_eq!(g.delta_origin, Vec2::new(50.0, 60.0));
        assert_eq!(offset, Vec2::new(45.0, 55.0));
    }

    #[test]
    fn test_delta_is_relative_to_press() {
        let mut g = bounded();
        g.begin(Vec2::new(50.0, 50.0), Vec2::ZERO);
        assert_eq!(g.delta, Vec2::ZERO);
        assert_eq!(g.calculate_delta(Vec2::new(54.0, 48.0)), Vec2::new(4.0, -2.0));
    }

    #[test]
    fn test_percent_without_constraints_is_zero() {
        let mut g = DragGeometry::new(Vec2::ZERO, None);
        g.begin(Vec2::new(5.0, 5.0), Vec2::ZERO);
        for p in [Vec2::new(500.0, -500.0), Vec2::new(5.0, 5.0), Vec2::new(-1e4, 3.0)] {
            assert_eq!(g.calculate_percent(p), Vec2::ZERO);
        }
    }

    #[test]
    fn test_percent_uses_constrained_position() {
        let mut g = bounded();
        g.begin(Vec2::new(50.0, 50.0), Vec2::ZERO);

        assert_eq!(g.calculate_percent(Vec2::new(150.0, 100.0)), Vec2::new(0.5, 0.5));
        assert_eq!(g.calculate_percent(Vec2::new(1000.0, 1000.0)), Vec2::new(1.0, 1.0));
        assert_eq!(g.calculate_percent(Vec2::new(-10.0, -10.0)), Vec2::ZERO);
    }

    #[test]
    fn test_percent_ignores_degenerate_axis() {
        let mut g = DragGeometry::new(
            Vec2::ZERO,
            Some(Constraints::from_array([30.0, 30.0, 0.0, 10.0])),
        );
        g.begin(Vec2::ZERO, Vec2::ZERO);
        let percent = g.calculate_percent(Vec2::new(5.0, 90.0));
        assert_eq!(percent, Vec2::new(0.5, 0.0));

        let mut g = DragGeometry::new(
            Vec2::ZERO,
            Some(Constraints::from_array([0.0, 10.0, 10.0, 0.0])),
        );
        g.begin(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(g.calculate_percent(Vec2::new(5.0, 5.0)).x, 0.0);
    }

    #[test]
    fn test_constrain_passthrough_and_idempotent() {
        let free = DragGeometry::new(Vec2::ZERO, None);
        let p = Vec2::new(-300.0, 900.0);
        assert_eq!(free.constrain(p), p);

        let g = bounded();
        let once = g.constrain(p);
        assert_eq!(once, Vec2::new(0.0, 100.0));
        assert_eq!(g.constrain(once), once);
    }

    #[test]
    fn test_frames() {
        let mut g = DragGeometry::new(Vec2::new(7.0, 9.0), None);
        g.begin(Vec2::new(20.0, 20.0), Vec2::new(7.0, 9.0));
        assert_eq!(g.frame().offset, Vec2::new(20.0, 20.0));
        assert_eq!(g.rest_frame().offset, Vec2::new(7.0, 9.0));
    }
}
