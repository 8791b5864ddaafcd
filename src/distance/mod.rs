//! Distance metric.
//!
//! Euclidean distance between points and the length of a point path.

mod metric;

pub use metric::{euclidean, path_length};
