//! Planar point type.

use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// Points carry no identity beyond their coordinates: two points with the
/// same `x` and `y` compare equal, which is how a depot is recognised inside
/// an input list.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// assert_eq!(a, Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        crate::distance::euclidean(self, other)
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_point_from_tuple() {
        let p: Point = (1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5, -2.0));
    }

    #[test]
    fn test_point_equality_by_value() {
        assert_eq!(Point::new(3.0, 4.0), Point::new(3.0, 4.0));
        assert_ne!(Point::new(3.0, 4.0), Point::new(4.0, 3.0));
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(0.0, 400.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_serde_shape() {
        let json = serde_json::to_string(&Point::new(2.0, 3.0)).expect("serialize");
        assert_eq!(json, r#"{"x":2.0,"y":3.0}"#);
        let back: Point = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Point::new(2.0, 3.0));
    }
}
