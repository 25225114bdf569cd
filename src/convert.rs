//! Mapping between model space and device space.
//!
//! Let `(x, y)` be a model point, `(x', y')` its pixel position, `(cx, cy)` the
//! viewport center and `s` the pixels per unit. Then
//!
//! ```text
//! x' = cx + s*x        x = (x' - cx) / s
//! y' = cy - s*y        y = (cy - y') / s
//! ```
//!
//! The y flip is the only orientation change; x keeps its sign.

use crate::errors::ConfigError;
use crate::types::{NumericError, Point, ScreenPoint, ScreenVector, Vector, Viewport};

/// Converts points and vectors between the model plane and the viewport.
///
/// Fixed at construction: there is no live zoom or pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenToPointsConverter {
    screen_center: ScreenPoint,
    pixels_per_unit: f64,
    viewport: Viewport,
}

impl ScreenToPointsConverter {
    /// Create a converter centered on the viewport.
    pub fn new(viewport: Viewport, pixels_per_unit: f64) -> Result<Self, ConfigError> {
        NumericError::check_positive(pixels_per_unit).map_err(|reason| {
            ConfigError::InvalidPixelsPerUnit {
                value: pixels_per_unit,
                reason,
            }
        })?;
        Ok(ScreenToPointsConverter {
            screen_center: viewport.center(),
            pixels_per_unit,
            viewport,
        })
    }

    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn screen_center(&self) -> ScreenPoint {
        self.screen_center
    }

    pub fn screen_coord(&self, p: Point) -> ScreenPoint {
        ScreenPoint::new(
            self.screen_center.x + p.x * self.pixels_per_unit,
            self.screen_center.y - p.y * self.pixels_per_unit,
        )
    }

    pub fn point_by_screen_coord(&self, p: ScreenPoint) -> Point {
        Point::new(
            (p.x - self.screen_center.x) / self.pixels_per_unit,
            (self.screen_center.y - p.y) / self.pixels_per_unit,
        )
    }

    /// Map a direction: the pixel offset from the viewport center to `v`
    /// projected as if it were a point.
    pub fn vector_to_screen(&self, v: Vector) -> ScreenVector {
        let tip = self.screen_coord(Point::new(v.x, v.y));
        tip - self.screen_center
    }

    /// Inverse of [`Self::vector_to_screen`].
    pub fn screen_vector_to_vector(&self, v: ScreenVector) -> Vector {
        let tip = self.point_by_screen_coord(self.screen_center + v);
        Vector::new(tip.x, tip.y)
    }

    pub fn is_screen_point_in_viewport(&self, p: ScreenPoint) -> bool {
        self.viewport.contains(p)
    }

    pub fn is_point_in_viewport(&self, p: Point) -> bool {
        self.is_screen_point_in_viewport(self.screen_coord(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> ScreenToPointsConverter {
        ScreenToPointsConverter::new(Viewport::try_new(300.0, 150.0).unwrap(), 50.0).unwrap()
    }

    fn assert_point_eq(actual: Point, expected: Point) {
        const TOLERANCE: f64 = 1e-9;
        assert!(
            (actual.x - expected.x).abs() < TOLERANCE && (actual.y - expected.y).abs() < TOLERANCE,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn default_scenario_positions() {
        let conv = converter();
        assert_eq!(conv.screen_coord(Point::ZERO), ScreenPoint::new(150.0, 75.0));
        assert_eq!(conv.screen_coord(Point::new(1.0, 0.0)), ScreenPoint::new(200.0, 75.0));
        assert_eq!(conv.screen_coord(Point::new(0.0, 1.0)), ScreenPoint::new(150.0, 25.0));
    }

    #[test]
    fn round_trip_holds() {
        let conv = converter();
        let samples = [
            Point::new(0.0, 0.0),
            Point::new(1.25, -3.5),
            Point::new(-1e3, 7.0 / 3.0),
            Point::new(0.1, 0.2),
            Point::new(-2.75, -0.001),
        ];
        for p in samples {
            assert_point_eq(conv.point_by_screen_coord(conv.screen_coord(p)), p);
        }
    }

    #[test]
    fn screen_coord_is_affine() {
        // f(p1 + p2 - o) == f(p1) + f(p2) - f(o) for the model zero o
        let conv = converter();
        let o = conv.screen_coord(Point::ZERO);
        let samples = [
            (Point::new(1.0, 2.0), Point::new(-0.5, 0.25)),
            (Point::new(-3.0, 0.0), Point::new(2.0, -2.0)),
            (Point::new(0.3, -0.7), Point::new(1.1, 4.4)),
        ];
        for (p1, p2) in samples {
            let combined = conv.screen_coord(Point::new(p1.x + p2.x, p1.y + p2.y));
            let s1 = conv.screen_coord(p1);
            let s2 = conv.screen_coord(p2);
            assert!((combined.x - (s1.x + s2.x - o.x)).abs() < 1e-9);
            assert!((combined.y - (s1.y + s2.y - o.y)).abs() < 1e-9);
        }
    }

    #[test]
    fn vectors_flip_y_only() {
        let conv = converter();
        assert_eq!(conv.vector_to_screen(Vector::new(1.0, 0.0)), ScreenVector::new(50.0, 0.0));
        assert_eq!(conv.vector_to_screen(Vector::new(0.0, 1.0)), ScreenVector::new(0.0, -50.0));
        assert_eq!(conv.vector_to_screen(Vector::new(-2.0, -1.0)), ScreenVector::new(-100.0, 50.0));
        let v = Vector::new(0.4, -1.6);
        let back = conv.screen_vector_to_vector(conv.vector_to_screen(v));
        assert!((back.x - v.x).abs() < 1e-9 && (back.y - v.y).abs() < 1e-9);
    }

    #[test]
    fn containment_is_inclusive() {
        let conv = converter();
        assert!(conv.is_screen_point_in_viewport(ScreenPoint::new(300.0, 150.0)));
        assert!(conv.is_point_in_viewport(Point::new(3.0, 1.5)));
        assert!(!conv.is_point_in_viewport(Point::new(3.01, 0.0)));
        assert!(!conv.is_point_in_viewport(Point::new(0.0, -1.6)));
    }

    #[test]
    fn rejects_non_positive_scale() {
        let vp = Viewport::try_new(10.0, 10.0).unwrap();
        assert!(matches!(
            ScreenToPointsConverter::new(vp, 0.0),
            Err(ConfigError::InvalidPixelsPerUnit { reason: NumericError::Zero, .. })
        ));
        assert!(ScreenToPointsConverter::new(vp, f64::INFINITY).is_err());
    }
}
