//! Tour type: an ordered visiting sequence with its length.

use serde::{Deserialize, Serialize};

use super::Point;
use crate::distance::path_length;

/// An ordered sequence of points together with its total length.
///
/// When a depot is in play the first and last points are the depot and the
/// length includes the closing leg back to it.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
///
/// let tour = Tour::from_points(vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(0.0, 0.0),
/// ]);
/// assert_eq!(tour.len(), 3);
/// assert!((tour.total_distance() - 10.0).abs() < 1e-10);
/// assert!(tour.starts_and_ends_at(&Point::new(0.0, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    points: Vec<Point>,
    total_distance: f64,
}

impl Tour {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Builds a tour from an ordered point sequence, computing its length.
    pub fn from_points(points: Vec<Point>) -> Self {
        let total_distance = path_length(&points);
        Self {
            points,
            total_distance,
        }
    }

    /// Returns the points in visiting order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of stops, counting both depot ends.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of consecutive-pair distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Returns `true` if the first and last stops are both `depot`.
    pub fn starts_and_ends_at(&self, depot: &Point) -> bool {
        matches!(
            (self.points.first(), self.points.last()),
            (Some(first), Some(last)) if first == depot && last == depot
        )
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_empty() {
        let t = Tour::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.total_distance(), 0.0);
        assert!(!t.starts_and_ends_at(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_tour_from_points_length() {
        let t = Tour::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        assert_eq!(t.len(), 4);
        assert!((t.total_distance() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_single_point() {
        let t = Tour::from_points(vec![Point::new(5.0, 5.0)]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.total_distance(), 0.0);
    }

    #[test]
    fn test_tour_depot_bounds() {
        let depot = Point::new(1.0, 1.0);
        let t = Tour::from_points(vec![depot, Point::new(2.0, 2.0), depot]);
        assert!(t.starts_and_ends_at(&depot));
        let open = Tour::from_points(vec![depot, Point::new(2.0, 2.0)]);
        assert!(!open.starts_and_ends_at(&depot));
    }

    #[test]
    fn test_tour_into_points() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let t = Tour::from_points(pts.clone());
        assert_eq!(t.into_points(), pts);
    }
}
