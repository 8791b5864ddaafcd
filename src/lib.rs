//! # u-tour
//!
//! Single-tour route optimization over planar points with an optional fixed
//! depot. Three interchangeable strategies of increasing cost:
//! nearest-neighbor construction, 2-opt refinement and genetic search.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour)
//! - [`distance`] — Euclidean metric and path length
//! - [`constructive`] — Nearest-neighbor construction
//! - [`local_search`] — 2-opt refinement
//! - [`ga`] — Genetic algorithm with order crossover and swap mutation
//! - [`optimizer`] — Strategy selection, validation and timing
//!
//! ## Example
//!
//! ```
//! use u_tour::models::Point;
//! use u_tour::optimize;
//!
//! let points = [
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let result = optimize(&points, Some(Point::new(0.0, 0.0)), "2opt").unwrap();
//! assert_eq!(result.route.len(), 5);
//! assert!((result.total_distance - 40.0).abs() < 1e-10);
//! ```

pub mod constructive;
pub mod distance;
mod error;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod optimizer;
mod stop;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::OptimizeError;
pub use optimizer::{optimize, Algorithm, OptimizationResult, Optimizer, OptimizerConfig};
pub use stop::StopFlag;
