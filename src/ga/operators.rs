//! Permutation operators: order crossover and swap mutation.
//!
//! Both operators take and return permutations of `0..n`, so every child is
//! a valid ordering of the same gene set.

use rand::Rng;

/// Order crossover (OX) producing a single child.
///
/// A random segment `[start, end]` of `parent1` is copied to the same
/// positions of the child; the remaining positions are filled left to right
/// with the genes of `parent2` in their original order, skipping genes the
/// segment already contributed.
///
/// # Panics
///
/// Panics if the parents differ in length or either is not a permutation
/// of `0..n`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tour::ga::order_crossover;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut child = order_crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], &mut rng);
/// child.sort_unstable();
/// assert_eq!(child, vec![0, 1, 2, 3, 4]);
/// ```
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    if n == 0 {
        return Vec::new();
    }
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    order_crossover_segment(parent1, parent2, a.min(b), a.max(b))
}

/// Order crossover with an explicit inclusive segment `[start, end]`.
pub(crate) fn order_crossover_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    let mut child = vec![usize::MAX; n];
    let mut taken = vec![false; n];
    for k in start..=end {
        child[k] = parent1[k];
        taken[parent1[k]] = true;
    }

    let mut donor = parent2.iter().copied().filter(|&g| !taken[g]);
    for (k, slot) in child.iter_mut().enumerate() {
        if (start..=end).contains(&k) {
            continue;
        }
        if let Some(g) = donor.next() {
            *slot = g;
        }
    }
    child
}

/// Swaps two distinct, uniformly chosen positions.
///
/// Sequences shorter than two are left untouched.
pub fn swap_mutation<R: Rng>(genes: &mut [usize], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    genes.swap(i, j);
}
