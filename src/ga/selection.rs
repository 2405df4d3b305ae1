//! Parent selection.
//!
//! Selection draws from a *pool* of population indices and removes the
//! chosen index from it, so the two parents of one offspring are always
//! distinct individuals.

use crate::labeling::Labeling;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **minimization** (lower weight = better).
///
/// # Examples
///
/// ```
/// use u_drdom::ga::Selection;
/// use u_drdom::labeling::Labeling;
/// use u_drdom::random::create_rng;
///
/// let population = vec![
///     Labeling::from_values(&[3, 3]).unwrap(),
///     Labeling::from_values(&[3, 0]).unwrap(),
/// ];
/// let mut pool = vec![0, 1];
/// let picked = Selection::Tournament.select(&population, &mut pool, &mut create_rng(1));
/// assert_eq!(picked, 1);
/// assert_eq!(pool, vec![0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// The lightest individual in the whole pool.
    ///
    /// Scanning starts from a random pool member, so ties go to that member
    /// when it is among the lightest.
    #[default]
    Tournament,

    /// Uniform draw from the pool, independent of weight.
    Roulette,

    /// Fitness-proportionate wheel using the inverse transformation
    /// `max_weight - weight + epsilon`.
    WeightedRoulette,
}

impl Selection {
    /// Selects a parent, removes it from `pool` and returns its population
    /// index.
    ///
    /// # Panics
    /// Panics if `pool` is empty.
    pub fn select<R: Rng + ?Sized>(
        &self,
        population: &[Labeling],
        pool: &mut Vec<usize>,
        rng: &mut R,
    ) -> usize {
        assert!(!pool.is_empty(), "cannot select from empty pool");

        let pos = match self {
            Selection::Tournament => tournament(population, pool, rng),
            Selection::Roulette => rng.random_range(0..pool.len()),
            Selection::WeightedRoulette => weighted_roulette(population, pool, rng),
        };
        pool.swap_remove(pos)
    }
}

/// Position in `pool` of the lightest individual.
fn tournament<R: Rng + ?Sized>(population: &[Labeling], pool: &[usize], rng: &mut R) -> usize {
    let mut best_pos = rng.random_range(0..pool.len());
    let mut best_weight = population[pool[best_pos]].weight();
    for (pos, &idx) in pool.iter().enumerate() {
        let w = population[idx].weight();
        if w < best_weight {
            best_weight = w;
            best_pos = pos;
        }
    }
    best_pos
}

fn weighted_roulette<R: Rng + ?Sized>(
    population: &[Labeling],
    pool: &[usize],
    rng: &mut R,
) -> usize {
    let n = pool.len();
    if n == 1 {
        return 0;
    }

    let weights: Vec<f64> = pool.iter().map(|&i| population[i].weight() as f64).collect();
    let max_weight = weights.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let epsilon = 1e-10;

    let slices: Vec<f64> = weights.iter().map(|&w| max_weight - w + epsilon).collect();
    let total: f64 = slices.iter().sum();

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (pos, &s) in slices.iter().enumerate() {
        cumulative += s;
        if cumulative > threshold {
            return pos;
        }
    }

    n - 1 // floating-point fallback
}
