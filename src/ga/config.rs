//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_drdom::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_drdom::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_selection(Selection::Tournament, Selection::WeightedRoulette)
///     .with_elite_ratio(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Must be at least 2 so that
    /// two distinct parents can be drawn in one reproduction round.
    pub population_size: usize,

    /// Number of generations; there is no early exit.
    pub max_generations: usize,

    /// Strategy drawing the first parent.
    pub first_selection: Selection,

    /// Strategy drawing the second parent from the remaining pool.
    pub second_selection: Selection,

    /// Fraction of the next generation filled with copies of the current
    /// best individual (0.0–1.0).
    pub elite_ratio: f64,

    /// Per-gene probability of resampling an offspring label from
    /// `{0, 2, 3}` before repair (0.0–1.0).
    pub mutation_rate: f64,

    /// When a construction heuristic is supplied, build every individual
    /// with its own heuristic call instead of cloning a single seed.
    pub diverse_seeding: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            first_selection: Selection::Tournament,
            second_selection: Selection::Roulette,
            elite_ratio: 0.1,
            mutation_rate: 0.05,
            diverse_seeding: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the strategies for the first and second parent.
    pub fn with_selection(mut self, first: Selection, second: Selection) -> Self {
        self.first_selection = first;
        self.second_selection = second;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_diverse_seeding(mut self, diverse: bool) -> Self {
        self.diverse_seeding = diverse;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elite copies carried into each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.elite_ratio) {
            return Err("elite_ratio must be in [0, 1]".into());
        }
        if self.elite_count() >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be in [0, 1]".into());
        }
        Ok(())
    }
}
