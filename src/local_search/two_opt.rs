//! 2-opt improvement with fixed endpoints.
//!
//! # Algorithm
//!
//! For interior positions `i < j` of a route `r`, compare the two edges that
//! bound the segment `r[i..=j]` against the edges obtained by reversing it:
//!
//! ```text
//! old = d(r[i-1], r[i]) + d(r[j], r[j+1])
//! new = d(r[i-1], r[j]) + d(r[i], r[j+1])
//! ```
//!
//! If `new < old`, reverse `r[i..=j]` immediately and keep scanning the
//! mutated route (first-improvement). Passes repeat until one makes no
//! change or the pass cap is reached.
//!
//! `r[0]` and `r[n-1]` never move, so a depot-bounded route stays bounded
//! and an open path keeps its chosen start and end.
//!
//! # Complexity
//!
//! O(n²) per pass, at most `max_passes` passes.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use serde::{Deserialize, Serialize};

use crate::constructive::nearest_neighbor;
use crate::distance::euclidean;
use crate::models::{Point, Tour};
use crate::stop::{should_stop, StopFlag};

/// Minimum gain for a reversal to count as an improvement.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Configuration for the 2-opt refiner.
///
/// # Examples
///
/// ```
/// use u_tour::local_search::TwoOptConfig;
///
/// let config = TwoOptConfig::default();
/// assert_eq!(config.max_passes, 100);
///
/// let quick = TwoOptConfig::default().with_max_passes(5);
/// assert_eq!(quick.max_passes, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoOptConfig {
    /// Upper bound on full scans over all `(i, j)` pairs.
    pub max_passes: usize,
    /// Checked between passes.
    #[serde(skip)]
    pub stop: Option<StopFlag>,
}

impl TwoOptConfig {
    /// Sets the maximum number of passes.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Attaches a stop flag.
    pub fn with_stop_flag(mut self, stop: StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            max_passes: 100,
            stop: None,
        }
    }
}

/// Builds a nearest-neighbor tour and refines it with 2-opt.
///
/// The result is never longer than the nearest-neighbor seed, and with a
/// depot it starts and ends at the depot.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::local_search::{two_opt, TwoOptConfig};
///
/// let depot = Point::new(0.0, 0.0);
/// let points = vec![
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let tour = two_opt(&points, Some(depot), &TwoOptConfig::default());
/// assert!(tour.starts_and_ends_at(&depot));
/// assert!((tour.total_distance() - 40.0).abs() < 1e-10);
/// ```
pub fn two_opt(points: &[Point], depot: Option<Point>, config: &TwoOptConfig) -> Tour {
    let seed = nearest_neighbor(points, depot);
    two_opt_improve(seed.points(), config)
}

/// Applies 2-opt to an arbitrary route, keeping its first and last stop fixed.
///
/// Routes with fewer than four stops have no interior pair to reverse and
/// are returned unchanged. The returned length is recomputed from the final
/// sequence.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::local_search::{two_opt_improve, TwoOptConfig};
///
/// // Crossing: (0,0)→(1,1)→(1,0)→(0,1)→(0,0)
/// let crossed = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(0.0, 0.0),
/// ];
/// let tour = two_opt_improve(&crossed, &TwoOptConfig::default());
/// assert!((tour.total_distance() - 4.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve(route: &[Point], config: &TwoOptConfig) -> Tour {
    let mut current = route.to_vec();
    let n = current.len();
    let mut passes = 0;

    if n >= 4 {
        let mut improved = true;
        while improved && passes < config.max_passes {
            if should_stop(config.stop.as_ref()) {
                log::warn!("2-opt stopped after {passes} passes");
                break;
            }
            improved = false;
            passes += 1;

            for i in 1..n - 2 {
                for j in i + 1..n - 1 {
                    if reversal_gain(&current, i, j) > IMPROVEMENT_EPS {
                        current[i..=j].reverse();
                        improved = true;
                    }
                }
            }
            log::trace!("2-opt pass {passes}: improved = {improved}");
        }
    }

    let tour = Tour::from_points(current);
    log::debug!(
        "2-opt finished after {passes} passes, length {:.3}",
        tour.total_distance()
    );
    tour
}

/// Length saved by reversing `route[i..=j]`. Positive means shorter.
fn reversal_gain(route: &[Point], i: usize, j: usize) -> f64 {
    let (prev, first, last, next) = (&route[i - 1], &route[i], &route[j], &route[j + 1]);
    let old_cost = euclidean(prev, first) + euclidean(last, next);
    let new_cost = euclidean(prev, last) + euclidean(first, next);
    old_cost - new_cost
}
