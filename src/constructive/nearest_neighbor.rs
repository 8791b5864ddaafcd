//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: from the current position, always move to the
//! nearest point not yet visited. With a depot the tour starts there and
//! returns there at the end.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Solution quality is
//! typically around 25% above optimal, which makes it a fast baseline and a
//! good seed for local search.

use crate::distance::euclidean;
use crate::models::{Point, Tour};

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Without a depot the first input point is the start and the tour is an
/// open path. With a depot the tour starts at the depot, visits every input
/// point and closes back at the depot; the closing leg is part of the total.
///
/// Ties are broken by input order: the first point at minimal distance wins.
/// The depot is not filtered out of `points`; callers passing a list that
/// contains the depot will see it visited as a regular stop.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::constructive::nearest_neighbor;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let tour = nearest_neighbor(&points, None);
/// assert_eq!(tour.points(), points.as_slice());
/// assert!((tour.total_distance() - 30.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(points: &[Point], depot: Option<Point>) -> Tour {
    let n = points.len();
    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n + 2);

    let mut current = match depot {
        Some(d) => d,
        None => match points.first() {
            Some(&first) => {
                visited[0] = true;
                first
            }
            None => return Tour::new(),
        },
    };
    route.push(current);

    loop {
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = euclidean(&current, p);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                current = points[next];
                route.push(current);
            }
            None => break,
        }
    }

    route.extend(depot);

    let tour = Tour::from_points(route);
    log::debug!(
        "nearest neighbor built tour of {} stops, length {:.3}",
        tour.len(),
        tour.total_distance()
    );
    tour
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_nn_square_no_depot() {
        let tour = nearest_neighbor(&square(), None);
        assert_eq!(tour.points(), square().as_slice());
        assert!((tour.total_distance() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_square_with_depot() {
        let depot = Point::new(0.0, 0.0);
        let pts = vec![
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let tour = nearest_neighbor(&pts, Some(depot));
        assert_eq!(
            tour.points(),
            &[
                depot,
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
                depot
            ]
        );
        assert!((tour.total_distance() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0), // far
            Point::new(1.0, 0.0),  // near
        ];
        let tour = nearest_neighbor(&pts, None);
        assert_eq!(
            tour.points(),
            &[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(10.0, 0.0)]
        );
        assert!((tour.total_distance() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_tie_broken_by_input_order() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(5.0, 0.0),
            Point::new(-5.0, 0.0),
        ];
        let tour = nearest_neighbor(&pts, None);
        // All three are at distance 5 from the start; the first listed wins.
        assert_eq!(tour.points()[1], Point::new(0.0, 5.0));
    }

    #[test]
    fn test_nn_single_point() {
        let tour = nearest_neighbor(&[Point::new(3.0, 3.0)], None);
        assert_eq!(tour.len(), 1);
        assert_eq!(tour.total_distance(), 0.0);
    }

    #[test]
    fn test_nn_empty() {
        let tour = nearest_neighbor(&[], None);
        assert!(tour.is_empty());
        let with_depot = nearest_neighbor(&[], Some(Point::new(1.0, 1.0)));
        assert_eq!(with_depot.len(), 2);
        assert_eq!(with_depot.total_distance(), 0.0);
    }

    #[test]
    fn test_nn_deterministic() {
        let pts = vec![
            Point::new(5.0, 1.0),
            Point::new(2.0, 8.0),
            Point::new(7.0, 3.0),
            Point::new(1.0, 1.0),
            Point::new(9.0, 9.0),
        ];
        let depot = Some(Point::new(4.0, 4.0));
        assert_eq!(nearest_neighbor(&pts, depot), nearest_neighbor(&pts, depot));
    }

    #[test]
    fn test_nn_large_coordinates() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(3e200, 4e200),
            Point::new(6e200, 8e200),
        ];
        let tour = nearest_neighbor(&pts, None);
        assert_eq!(tour.points(), pts.as_slice());
        assert!(tour.total_distance().is_finite());
        assert!((tour.total_distance() / 1e201 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_nn_coincident_points() {
        let p = Point::new(2.0, 2.0);
        let tour = nearest_neighbor(&[p, p, Point::new(3.0, 2.0)], None);
        assert_eq!(tour.len(), 3);
        assert!((tour.total_distance() - 1.0).abs() < 1e-10);
    }
}
