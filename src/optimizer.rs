//! Strategy selection, input validation and timing.
//!
//! [`optimize`] is the single entry point a presentation layer needs: it
//! takes the working point set, an optional depot and an algorithm name,
//! and returns the route with its length and wall-clock cost.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::constructive::nearest_neighbor;
use crate::error::OptimizeError;
use crate::ga::{genetic, GeneticConfig};
use crate::local_search::{two_opt, TwoOptConfig};
use crate::models::{Point, Tour};

/// Minimum number of input points for a meaningful route.
pub const MIN_POINTS: usize = 2;

/// Available tour construction strategies.
///
/// # Examples
///
/// ```
/// use u_tour::optimizer::Algorithm;
///
/// let algo: Algorithm = "2opt".parse().unwrap();
/// assert_eq!(algo, Algorithm::TwoOpt);
/// assert_eq!(algo.to_string(), "2opt");
/// assert!("bogus".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Nearest-neighbor construction.
    #[serde(rename = "greedy")]
    Greedy,
    /// Nearest-neighbor seed refined by 2-opt.
    #[serde(rename = "2opt")]
    TwoOpt,
    /// Elitist genetic search.
    #[serde(rename = "genetic")]
    Genetic,
}

impl Algorithm {
    /// All strategies, cheapest first.
    pub const ALL: [Algorithm; 3] = [Algorithm::Greedy, Algorithm::TwoOpt, Algorithm::Genetic];

    /// Selector name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::TwoOpt => "2opt",
            Algorithm::Genetic => "genetic",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| OptimizeError::UnknownAlgorithm(s.to_string()))
    }
}

/// Result of a single optimization request.
///
/// Serializes with camelCase keys (`route`, `totalDistance`,
/// `algorithmUsed`, `computeTimeMs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Visiting order; depot-bounded when a depot was given.
    pub route: Vec<Point>,
    /// Sum of consecutive distances along `route`.
    pub total_distance: f64,
    /// Strategy that produced the route.
    pub algorithm_used: Algorithm,
    /// Wall-clock time spent in the strategy, in milliseconds.
    pub compute_time_ms: f64,
}

/// Per-strategy settings and the optional seed for the genetic solver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// 2-opt settings.
    pub two_opt: TwoOptConfig,
    /// Genetic solver settings.
    pub genetic: GeneticConfig,
    /// Seed for reproducible genetic runs; `None` uses the thread-local generator.
    pub seed: Option<u64>,
}

impl OptimizerConfig {
    /// Sets the 2-opt settings.
    pub fn with_two_opt(mut self, two_opt: TwoOptConfig) -> Self {
        self.two_opt = two_opt;
        self
    }

    /// Sets the genetic solver settings.
    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Stateless dispatcher over the three strategies.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::optimizer::{Algorithm, Optimizer, OptimizerConfig};
///
/// let optimizer = Optimizer::new(OptimizerConfig::default().with_seed(7));
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
/// let result = optimizer.run(&points, None, Algorithm::Genetic).unwrap();
/// assert_eq!(result.route.len(), 3);
/// assert_eq!(result.algorithm_used, Algorithm::Genetic);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Validates the input, resolves `algorithm` by name and runs it.
    ///
    /// Input is checked before the selector, so an empty point list with a
    /// bogus name reports [`OptimizeError::InvalidInput`].
    pub fn optimize(
        &self,
        points: &[Point],
        depot: Option<Point>,
        algorithm: &str,
    ) -> Result<OptimizationResult, OptimizeError> {
        validate(points, depot)?;
        let algorithm = algorithm.parse()?;
        Ok(self.dispatch(points, depot, algorithm))
    }

    /// Validates the input and runs the given strategy.
    pub fn run(
        &self,
        points: &[Point],
        depot: Option<Point>,
        algorithm: Algorithm,
    ) -> Result<OptimizationResult, OptimizeError> {
        validate(points, depot)?;
        Ok(self.dispatch(points, depot, algorithm))
    }

    fn dispatch(&self, points: &[Point], depot: Option<Point>, algorithm: Algorithm) -> OptimizationResult {
        let stops = without_depot(points, depot);
        let (tour, compute_time_ms) = timed(|| self.solve(&stops, depot, algorithm));

        log::info!(
            "{algorithm}: {} points, length {:.3}, {compute_time_ms:.3} ms",
            points.len(),
            tour.total_distance()
        );

        let total_distance = tour.total_distance();
        OptimizationResult {
            route: tour.into_points(),
            total_distance,
            algorithm_used: algorithm,
            compute_time_ms,
        }
    }

    fn solve(&self, points: &[Point], depot: Option<Point>, algorithm: Algorithm) -> Tour {
        match algorithm {
            Algorithm::Greedy => nearest_neighbor(points, depot),
            Algorithm::TwoOpt => two_opt(points, depot, &self.config.two_opt),
            Algorithm::Genetic => match self.config.seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    genetic(points, depot, &self.config.genetic, &mut rng)
                }
                None => genetic(points, depot, &self.config.genetic, &mut rand::rng()),
            },
        }
    }
}

/// Runs `algorithm` with default settings.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::optimizer::optimize;
/// use u_tour::OptimizeError;
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let result = optimize(&square, None, "greedy").unwrap();
/// assert!((result.total_distance - 30.0).abs() < 1e-10);
///
/// assert!(matches!(optimize(&square[..1], None, "greedy"), Err(OptimizeError::InvalidInput(_))));
/// assert!(matches!(optimize(&square, None, "bogus"), Err(OptimizeError::UnknownAlgorithm(_))));
/// ```
pub fn optimize(
    points: &[Point],
    depot: Option<Point>,
    algorithm: &str,
) -> Result<OptimizationResult, OptimizeError> {
    Optimizer::default().optimize(points, depot, algorithm)
}

fn validate(points: &[Point], depot: Option<Point>) -> Result<(), OptimizeError> {
    if points.len() < MIN_POINTS {
        return Err(OptimizeError::InvalidInput(format!(
            "at least {MIN_POINTS} points are required, got {}",
            points.len()
        )));
    }
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(OptimizeError::InvalidInput(format!(
            "point {i} has a non-finite coordinate"
        )));
    }
    if depot.is_some_and(|d| !d.is_finite()) {
        return Err(OptimizeError::InvalidInput(
            "depot has a non-finite coordinate".to_string(),
        ));
    }
    Ok(())
}

/// Drops input points that coincide with the depot.
fn without_depot(points: &[Point], depot: Option<Point>) -> Vec<Point> {
    match depot {
        Some(d) => points.iter().copied().filter(|p| *p != d).collect(),
        None => points.to_vec(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = std::time::Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64() * 1000.0)
}

// `std::time::Instant` panics on wasm32-unknown-unknown.
#[cfg(target_arch = "wasm32")]
fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = js_sys::Date::now();
    let out = f();
    (out, js_sys::Date::now() - start)
}
