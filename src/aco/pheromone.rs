//! Per-vertex pheromone values.

use crate::labeling::{Label, Labeling};

/// One pheromone value per vertex id.
///
/// Values start uniform and are pulled toward `[0, 1]` targets by
/// exponential smoothing; they are not clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneTable {
    values: Vec<f64>,
    initial: f64,
}

impl PheromoneTable {
    pub fn new(len: usize, initial: f64) -> Self {
        Self {
            values: vec![initial; len],
            initial,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, v: usize) -> f64 {
        self.values[v]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Restores every value to the initial level.
    pub fn reset(&mut self) {
        self.values.fill(self.initial);
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Smooths every value toward the weighted indicator of label 3:
    ///
    /// `target(v) = (w_ib · [ib(v) = 3] + w_bs · [bs(v) = 3]) / (w_ib + w_bs)`
    ///
    /// `τ(v) += rate · (target(v) − τ(v))`
    ///
    /// where `ib` is the iteration best and `bs` the best so far, and `w`
    /// their total weights. Skipped when both weights sum to zero or less.
    pub fn update(&mut self, iteration_best: &Labeling, best: &Labeling, rate: f64) {
        let w_ib = iteration_best.weight() as f64;
        let w_bs = best.weight() as f64;
        let total = w_ib + w_bs;
        if total <= 0.0 {
            return;
        }

        for (v, tau) in self.values.iter_mut().enumerate() {
            let ib = if iteration_best.label(v) == Label::Three { w_ib } else { 0.0 };
            let bs = if best.label(v) == Label::Three { w_bs } else { 0.0 };
            let target = (ib + bs) / total;
            *tau += rate * (target - *tau);
        }
    }

    /// Spread of the values rescaled to `[-1, 1]`.
    ///
    /// `cf = 2 · Σ max(τmax − τ, τ − τmin) / (n · (τmax + τmin)) − 1`
    ///
    /// Uniform values give −1; values split between 0 and 1 give 1. An
    /// all-zero table counts as converged (1).
    pub fn convergence_factor(&self) -> f64 {
        if self.values.is_empty() {
            return -1.0;
        }
        let max = self.max();
        let min = self.min();
        if max + min <= 0.0 {
            return 1.0;
        }
        let spread: f64 = self
            .values
            .iter()
            .map(|&tau| (max - tau).max(tau - min))
            .sum();
        2.0 * spread / (self.values.len() as f64 * (max + min)) - 1.0
    }
}
