//! Euclidean metric and path length.

use crate::models::Point;

/// Straight-line distance between two points.
///
/// Symmetric and zero for coincident points. Computed with `hypot`, so
/// large finite coordinates do not overflow to infinity.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::euclidean;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((euclidean(&a, &b) - 5.0).abs() < 1e-10);
/// assert_eq!(euclidean(&a, &a), 0.0);
/// ```
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Total length of a path: the sum of distances between consecutive points.
///
/// Paths with fewer than two points have length zero. A closed tour must
/// repeat its start point at the end for the closing leg to be counted.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::path_length;
///
/// let path = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
/// assert!((path_length(&path) - 2.0).abs() < 1e-10);
/// ```
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| euclidean(&w[0], &w[1])).sum()
}
