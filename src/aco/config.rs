//! ACO and RVNS configuration.

/// Parameters of the RVNS improvement step run by every ant.
///
/// # Examples
///
/// ```
/// use u_drdom::aco::RvnsConfig;
///
/// let config = RvnsConfig::default()
///     .with_max_iterations(50)
///     .with_max_no_improve(5);
/// assert_eq!(config.max_iterations, 50);
/// assert!((config.destruction_rate(1) - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RvnsConfig {
    /// Destruction rate of the first neighborhood.
    pub min_destruction_rate: f64,
    /// Destruction rate of the last neighborhood.
    pub max_destruction_rate: f64,
    /// Number of neighborhoods (destruction levels) cycled through.
    pub neighborhood_count: usize,
    /// Destroy/rebuild rounds per RVNS call.
    pub max_iterations: usize,
    /// Consecutive rounds without improvement before stopping.
    pub max_no_improve: usize,
}

impl Default for RvnsConfig {
    fn default() -> Self {
        Self {
            min_destruction_rate: 0.2,
            max_destruction_rate: 0.5,
            neighborhood_count: 5,
            max_iterations: 150,
            max_no_improve: 10,
        }
    }
}

impl RvnsConfig {
    /// Sets the destruction rate range.
    pub fn with_destruction_rates(mut self, min: f64, max: f64) -> Self {
        self.min_destruction_rate = min.clamp(0.0, 1.0);
        self.max_destruction_rate = max.clamp(0.0, 1.0);
        self
    }

    pub fn with_neighborhood_count(mut self, n: usize) -> Self {
        self.neighborhood_count = n;
        self
    }

    /// Sets the round budget per RVNS call.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the no-improvement limit.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Destruction rate for neighborhood `k` (1-based), interpolated
    /// linearly from the minimum at `k = 1` to the maximum at
    /// `k = neighborhood_count`.
    pub fn destruction_rate(&self, k: usize) -> f64 {
        if self.neighborhood_count <= 1 {
            return self.min_destruction_rate;
        }
        let k = k.clamp(1, self.neighborhood_count);
        self.min_destruction_rate
            + (k - 1) as f64 * (self.max_destruction_rate - self.min_destruction_rate)
                / (self.neighborhood_count - 1) as f64
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_destruction_rate)
            || !(0.0..=1.0).contains(&self.max_destruction_rate)
        {
            return Err("destruction rates must be in [0, 1]".into());
        }
        if self.min_destruction_rate > self.max_destruction_rate {
            return Err("min_destruction_rate exceeds max_destruction_rate".into());
        }
        if self.neighborhood_count == 0 {
            return Err("neighborhood_count must be at least 1".into());
        }
        Ok(())
    }
}

/// Configuration for the ant colony.
///
/// # Examples
///
/// ```
/// use u_drdom::aco::AcoConfig;
///
/// let config = AcoConfig::default().with_ant_count(4).with_seed(1);
/// assert!(config.validate().is_ok());
/// assert!((config.initial_pheromone - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants per outer iteration.
    pub ant_count: usize,

    /// Outer iterations used by the coordinator.
    pub iterations: usize,

    /// Smoothing rate of the pheromone update (0.0–1.0).
    pub evaporation_rate: f64,

    /// Uniform pheromone value at start and after a convergence reset.
    pub initial_pheromone: f64,

    /// Probability that construction and destruction pick the vertex with
    /// the largest `degree × pheromone` instead of a uniform one.
    pub construct_greedy_probability: f64,

    /// Same choice rule for the extension step.
    pub extend_greedy_probability: f64,

    /// Fraction of 0/2-labeled vertices raised to 3 by the extension step.
    pub extend_rate: f64,

    /// Convergence factor above which pheromones are reset.
    pub convergence_threshold: f64,

    /// Parameters of the per-ant improvement step.
    pub rvns: RvnsConfig,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ant_count: 10,
            iterations: 50,
            evaporation_rate: 0.2,
            initial_pheromone: 0.5,
            construct_greedy_probability: 0.3,
            extend_greedy_probability: 0.1,
            extend_rate: 0.05,
            convergence_threshold: 0.99,
            rvns: RvnsConfig::default(),
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the pheromone smoothing rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets both greedy-choice probabilities.
    pub fn with_greedy_probabilities(mut self, construct: f64, extend: f64) -> Self {
        self.construct_greedy_probability = construct.clamp(0.0, 1.0);
        self.extend_greedy_probability = extend.clamp(0.0, 1.0);
        self
    }

    pub fn with_extend_rate(mut self, rate: f64) -> Self {
        self.extend_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_rvns(mut self, rvns: RvnsConfig) -> Self {
        self.rvns = rvns;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.ant_count == 0 {
            return Err("ant_count must be at least 1".into());
        }
        for (name, value) in [
            ("evaporation_rate", self.evaporation_rate),
            ("initial_pheromone", self.initial_pheromone),
            ("construct_greedy_probability", self.construct_greedy_probability),
            ("extend_greedy_probability", self.extend_greedy_probability),
            ("extend_rate", self.extend_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be in [0, 1]"));
            }
        }
        self.rvns.validate()
    }
}
