//! Generational genetic search over tour permutations.
//!
//! # Scheme
//!
//! - **Initialisation**: uniform random permutations of the gene pool
//! - **Ranking**: by fitness `1 / (length + 1)`, best first
//! - **Elitism**: the top `elite_count` survive unchanged
//! - **Reproduction**: two parents drawn uniformly from the top
//!   `parent_pool`, one child per pair via order crossover, then a swap
//!   mutation with probability `mutation_rate`
//! - **Termination**: exactly `generations` generations
//!
//! The depot never enters the genes, so crossover and mutation only act on
//! the interior of the tour.

use rand::seq::SliceRandom;
use rand::Rng;

use super::chromosome::{Chromosome, GenePool};
use super::config::GeneticConfig;
use super::operators::{order_crossover, swap_mutation};
use crate::models::{Point, Tour};
use crate::stop::should_stop;

/// Evolves a population of tours and returns the shortest one found.
///
/// Randomness comes entirely from `rng`; a seeded generator gives a
/// reproducible run. Input points equal to the depot are dropped before
/// evolution, and the returned tour starts and ends at the depot if one is
/// given.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tour::models::Point;
/// use u_tour::ga::{genetic, GeneticConfig};
///
/// let depot = Point::new(0.0, 0.0);
/// let points = vec![
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = genetic(&points, Some(depot), &GeneticConfig::default(), &mut rng);
/// assert_eq!(tour.len(), 5);
/// assert!(tour.starts_and_ends_at(&depot));
/// assert!((tour.total_distance() - 40.0).abs() < 1e-10);
/// ```
pub fn genetic<R: Rng>(
    points: &[Point],
    depot: Option<Point>,
    config: &GeneticConfig,
    rng: &mut R,
) -> Tour {
    let pool = GenePool::new(points, depot);
    let population_size = config.effective_population();

    let mut population: Vec<Chromosome> = (0..population_size)
        .map(|_| random_individual(&pool, rng))
        .collect();

    let mut generation = 0;
    while generation < config.generations {
        if should_stop(config.stop.as_ref()) {
            log::warn!("genetic search stopped after {generation} generations");
            break;
        }
        population = next_generation(population, &pool, config, rng);
        generation += 1;
        log::trace!(
            "generation {generation}: best length {:.3}",
            population[0].length()
        );
    }

    let best = population
        .iter()
        .min_by(|a, b| a.length().total_cmp(&b.length()));
    let tour = match best {
        Some(best) => pool.decode(best.genes()),
        None => pool.decode(&[]),
    };
    log::debug!(
        "genetic search finished after {generation} generations, length {:.3}",
        tour.total_distance()
    );
    tour
}

fn random_individual<R: Rng>(pool: &GenePool, rng: &mut R) -> Chromosome {
    let mut genes: Vec<usize> = (0..pool.len()).collect();
    genes.shuffle(rng);
    Chromosome::new(genes, pool)
}

/// Ranks `population`, keeps the elites and refills with mutated offspring.
fn next_generation<R: Rng>(
    mut population: Vec<Chromosome>,
    pool: &GenePool,
    config: &GeneticConfig,
    rng: &mut R,
) -> Vec<Chromosome> {
    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));

    let target = config.effective_population();
    let parents = config.effective_parent_pool().min(population.len());
    let mut next = Vec::with_capacity(target);
    next.extend(population.iter().take(config.effective_elites()).cloned());

    while next.len() < target {
        let p1 = &population[rng.random_range(0..parents)];
        let p2 = &population[rng.random_range(0..parents)];
        let mut child = order_crossover(p1.genes(), p2.genes(), rng);
        if rng.random::<f64>() < config.mutation_rate {
            swap_mutation(&mut child, rng);
        }
        next.push(Chromosome::new(child, pool));
    }

    // Keep the best individual first for logging.
    if let Some(best) = next
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.length().total_cmp(&b.length()))
        .map(|(i, _)| i)
    {
        next.swap(0, best);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::path_length;
    use crate::stop::StopFlag;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scattered() -> Vec<Point> {
        vec![
            Point::new(12.0, 40.0),
            Point::new(300.0, 20.0),
            Point::new(150.0, 390.0),
            Point::new(480.0, 210.0),
            Point::new(75.0, 75.0),
            Point::new(250.0, 250.0),
            Point::new(410.0, 30.0),
            Point::new(30.0, 300.0),
            Point::new(200.0, 120.0),
        ]
    }

    fn sorted_xy(points: &[Point]) -> Vec<(f64, f64)> {
        let mut v: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
        v.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        v
    }

    #[test]
    fn test_genetic_visits_every_point_once() {
        let pts = scattered();
        let mut rng = StdRng::seed_from_u64(42);
        let tour = genetic(&pts, None, &GeneticConfig::default(), &mut rng);
        assert_eq!(tour.len(), pts.len());
        assert_eq!(sorted_xy(tour.points()), sorted_xy(&pts));
        assert!((tour.total_distance() - path_length(tour.points())).abs() < 1e-9);
    }

    #[test]
    fn test_genetic_depot_bounded() {
        let pts = scattered();
        let depot = Point::new(250.0, 200.0);
        let mut rng = StdRng::seed_from_u64(7);
        let tour = genetic(&pts, Some(depot), &GeneticConfig::default(), &mut rng);
        assert_eq!(tour.len(), pts.len() + 2);
        assert!(tour.starts_and_ends_at(&depot));
        assert_eq!(sorted_xy(&tour.points()[1..tour.len() - 1]), sorted_xy(&pts));
    }

    #[test]
    fn test_genetic_drops_depot_duplicates() {
        let depot = Point::new(0.0, 0.0);
        let pts = vec![depot, Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
        let mut rng = StdRng::seed_from_u64(1);
        let tour = genetic(&pts, Some(depot), &GeneticConfig::default(), &mut rng);
        assert_eq!(tour.len(), 4);
        assert!(tour.starts_and_ends_at(&depot));
    }

    #[test]
    fn test_genetic_reproducible_with_seed() {
        let pts = scattered();
        let config = GeneticConfig::default().with_generations(20);
        let a = genetic(&pts, None, &config, &mut StdRng::seed_from_u64(99));
        let b = genetic(&pts, None, &config, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_genetic_finds_square_optimum() {
        let depot = Point::new(0.0, 0.0);
        let pts = vec![
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let tour = genetic(&pts, Some(depot), &GeneticConfig::default(), &mut rng);
        assert!((tour.total_distance() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_genetic_elites_never_regress() {
        let pts = scattered();
        let pool = GenePool::new(&pts, None);
        let config = GeneticConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| random_individual(&pool, &mut rng))
            .collect();
        let mut best = f64::INFINITY;
        for _ in 0..30 {
            population = next_generation(population, &pool, &config, &mut rng);
            assert_eq!(population.len(), config.population_size);
            let current = population[0].length();
            assert!(current <= best + 1e-12);
            best = current;
        }
    }

    #[test]
    fn test_genetic_zero_generations_returns_valid_tour() {
        let pts = scattered();
        let config = GeneticConfig::default().with_generations(0);
        let mut rng = StdRng::seed_from_u64(3);
        let tour = genetic(&pts, None, &config, &mut rng);
        assert_eq!(tour.len(), pts.len());
    }

    #[test]
    fn test_genetic_stop_flag() {
        let stop = StopFlag::new();
        stop.stop();
        let config = GeneticConfig::default().with_stop_flag(stop);
        let depot = Point::new(1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(3);
        let tour = genetic(&scattered(), Some(depot), &config, &mut rng);
        assert_eq!(tour.len(), scattered().len() + 2);
        assert!(tour.starts_and_ends_at(&depot));
    }

    #[test]
    fn test_genetic_tiny_population() {
        let config = GeneticConfig::default()
            .with_population_size(1)
            .with_generations(5);
        let mut rng = StdRng::seed_from_u64(8);
        let tour = genetic(&scattered(), None, &config, &mut rng);
        assert_eq!(tour.len(), scattered().len());
    }
}
