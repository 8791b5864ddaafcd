//! Genetic solver configuration.

use serde::{Deserialize, Serialize};

use crate::stop::StopFlag;

/// Hyperparameters for the genetic solver.
///
/// Defaults: population 50, 100 generations, mutation probability 0.1,
/// 10 elites kept per generation, parents drawn from the best 20.
///
/// # Examples
///
/// ```
/// use u_tour::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(30)
///     .with_generations(20)
///     .with_mutation_rate(0.2);
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.generations, 20);
/// assert!((config.mutation_rate - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneticConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Generations to run; there is no early convergence stop.
    pub generations: usize,
    /// Probability that a child receives a swap mutation.
    pub mutation_rate: f64,
    /// Best individuals copied unchanged into the next generation.
    pub elite_count: usize,
    /// Parents are drawn uniformly from this many top-ranked individuals.
    pub parent_pool: usize,
    /// Checked between generations.
    #[serde(skip)]
    pub stop: Option<StopFlag>,
}

impl GeneticConfig {
    /// Sets the population size (at least 1).
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size.max(1);
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, count: usize) -> Self {
        self.elite_count = count;
        self
    }

    /// Sets the size of the parent pool (at least 1).
    pub fn with_parent_pool(mut self, size: usize) -> Self {
        self.parent_pool = size.max(1);
        self
    }

    /// Attaches a stop flag.
    pub fn with_stop_flag(mut self, stop: StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Population size actually used (at least 1).
    pub(crate) fn effective_population(&self) -> usize {
        self.population_size.max(1)
    }

    /// Elites actually kept, never more than the population.
    pub(crate) fn effective_elites(&self) -> usize {
        self.elite_count.min(self.effective_population())
    }

    /// Parent pool actually sampled, never more than the population.
    pub(crate) fn effective_parent_pool(&self) -> usize {
        self.parent_pool.clamp(1, self.effective_population())
    }
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            elite_count: 10,
            parent_pool: 20,
            stop: None,
        }
    }
}
