//! Local search for improving a single tour.
//!
//! - [`two_opt`] — Nearest-neighbor seed refined by first-improvement 2-opt
//! - [`two_opt_improve`] — 2-opt on an arbitrary route with fixed endpoints

mod two_opt;

pub use two_opt::{two_opt, two_opt_improve, TwoOptConfig};
