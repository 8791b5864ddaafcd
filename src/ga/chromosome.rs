//! Tour chromosome for the genetic solver.
//!
//! A chromosome is a permutation of indices into the pool of points to
//! visit. The depot is not part of the genes: it is a constant prefix and
//! suffix added when the chromosome is decoded, so recombination can never
//! move it away from the tour ends.

use crate::distance::euclidean;
use crate::models::{Point, Tour};

/// The points an individual orders, plus the optional fixed depot.
#[derive(Debug, Clone)]
pub struct GenePool {
    points: Vec<Point>,
    depot: Option<Point>,
}

impl GenePool {
    /// Builds a pool from raw input, dropping every occurrence of the depot.
    pub fn new(points: &[Point], depot: Option<Point>) -> Self {
        let points = points
            .iter()
            .copied()
            .filter(|p| depot.as_ref() != Some(p))
            .collect();
        Self { points, depot }
    }

    /// Number of genes per chromosome.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there is nothing to order.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Depot bounding every decoded tour.
    pub fn depot(&self) -> Option<Point> {
        self.depot
    }

    /// Length of the tour a gene sequence encodes, closing leg included.
    ///
    /// # Panics
    ///
    /// Panics if any gene is not a valid index into the pool.
    pub fn tour_length(&self, genes: &[usize]) -> f64 {
        let mut dist: f64 = genes
            .windows(2)
            .map(|w| euclidean(&self.points[w[0]], &self.points[w[1]]))
            .sum();
        if let (Some(depot), Some(&first), Some(&last)) = (self.depot, genes.first(), genes.last()) {
            dist += euclidean(&depot, &self.points[first]);
            dist += euclidean(&self.points[last], &depot);
        }
        dist
    }

    /// Expands genes into a full point sequence, depot at both ends if set.
    ///
    /// # Panics
    ///
    /// Panics if any gene is not a valid index into the pool.
    pub fn decode(&self, genes: &[usize]) -> Tour {
        let mut route = Vec::with_capacity(genes.len() + 2);
        route.extend(self.depot);
        route.extend(genes.iter().map(|&g| self.points[g]));
        route.extend(self.depot);
        Tour::from_points(route)
    }
}

/// A candidate tour: gene permutation plus its cached length.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::ga::{Chromosome, GenePool};
///
/// let pool = GenePool::new(
///     &[Point::new(10.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)],
///     Some(Point::new(0.0, 0.0)),
/// );
/// let c = Chromosome::new(vec![0, 1, 2], &pool);
/// assert!((c.length() - 40.0).abs() < 1e-10);
/// assert!(c.fitness() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Chromosome {
    genes: Vec<usize>,
    length: f64,
}

impl Chromosome {
    /// Creates and evaluates a chromosome.
    ///
    /// # Panics
    ///
    /// Panics if any gene is not a valid index into `pool`.
    pub fn new(genes: Vec<usize>, pool: &GenePool) -> Self {
        let length = pool.tour_length(&genes);
        Self { genes, length }
    }

    /// The gene permutation.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Tour length of this individual.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// `1 / (length + 1)`: strictly positive, higher is better.
    pub fn fitness(&self) -> f64 {
        1.0 / (self.length + 1.0)
    }
}
