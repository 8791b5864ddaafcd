//! Genetic algorithm components for single-tour routing.
//!
//! - [`Chromosome`] / [`GenePool`] — Interior permutation encoding; the depot is a fixed prefix and suffix
//! - [`order_crossover`], [`swap_mutation`] — Permutation-preserving operators
//! - [`GeneticConfig`] — Population, generation and selection parameters
//! - [`genetic`] — Elitist generational search

mod chromosome;
mod config;
mod operators;
mod solver;

pub use chromosome::{Chromosome, GenePool};
pub use config::GeneticConfig;
pub use operators::{order_crossover, swap_mutation};
pub use solver::genetic;
