//! Domain model types for single-tour routing.
//!
//! Points are plain planar coordinates; a tour is an ordered sequence of
//! points with its length, bounded by the depot when one is set.

mod point;
mod tour;

pub use point::Point;
pub use tour::Tour;
