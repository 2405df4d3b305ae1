//! Ant colony execution engine.
//!
//! Each outer iteration sends `ant_count` ants. An ant starts from an
//! all-unassigned labeling and runs construct → extend → reduce → RVNS.
//! The lightest ant of the iteration and the best-so-far labeling then
//! drive the pheromone update; when the pheromones have converged they
//! are reset to the initial level.

use super::config::AcoConfig;
use super::pheromone::PheromoneTable;
use crate::error::{DrdError, Result};
use crate::graph::Graph;
use crate::labeling::{Label, Labeling};
use crate::random::{rng_from_option, DrdRng};
use tracing::{debug, info};

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The lightest labeling found so far.
    pub best: Labeling,

    /// Weight of `best`.
    pub best_weight: i64,

    /// Outer iterations executed by this call.
    pub iterations: usize,

    /// Best-so-far weight after each outer iteration.
    pub weight_history: Vec<i64>,

    /// Number of convergence resets of the pheromone table.
    pub pheromone_resets: usize,
}

/// Ant colony optimization for Double Roman Domination.
///
/// Borrows the graph read-only; every phase works on a private copy.
///
/// # Usage
///
/// ```
/// use u_drdom::aco::{AcoConfig, AntColony};
/// use u_drdom::graph::Graph;
///
/// let graph = Graph::from_edges(5, false, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
/// let mut aco = AntColony::new(&graph, AcoConfig::default().with_seed(42)).unwrap();
///
/// let result = aco.run(5);
/// assert!(result.best.is_feasible(&graph));
/// assert_eq!(result.best_weight, 3);
/// ```
pub struct AntColony<'g> {
    pub(super) graph: &'g Graph,
    pub(super) config: AcoConfig,
    pub(super) pheromone: PheromoneTable,
    pub(super) rng: DrdRng,
    best: Labeling,
    iteration_best: Option<Labeling>,
    convergence: f64,
}

impl<'g> AntColony<'g> {
    /// Creates a colony over `graph`.
    ///
    /// The best-so-far labeling starts as the trivial all-3 labeling.
    ///
    /// # Errors
    /// `EmptyGraph` for a graph without vertices, `InvalidConfig` when
    /// [`AcoConfig::validate`] fails.
    pub fn new(graph: &'g Graph, config: AcoConfig) -> Result<Self> {
        if graph.is_empty() {
            return Err(DrdError::EmptyGraph);
        }
        config.validate().map_err(DrdError::InvalidConfig)?;

        let pheromone = PheromoneTable::new(graph.capacity(), config.initial_pheromone);
        let rng = rng_from_option(config.seed);
        let best = initial_labeling(graph, Label::Three);
        let convergence = pheromone.convergence_factor();

        Ok(Self {
            graph,
            config,
            pheromone,
            rng,
            best,
            iteration_best: None,
            convergence,
        })
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    pub fn pheromone(&self) -> &PheromoneTable {
        &self.pheromone
    }

    /// Best-so-far labeling.
    pub fn best(&self) -> &Labeling {
        &self.best
    }

    /// Lightest ant of the last completed iteration.
    pub fn iteration_best(&self) -> Option<&Labeling> {
        self.iteration_best.as_ref()
    }

    /// Convergence factor after the last pheromone update.
    pub fn convergence(&self) -> f64 {
        self.convergence
    }

    /// One ant: construct → extend → reduce → RVNS from scratch.
    pub fn build_ant(&mut self) -> Labeling {
        let mut solution = initial_labeling(self.graph, Label::Unassigned);
        self.construct(&mut solution);
        self.extend(&mut solution);
        self.reduce(&mut solution);
        self.rvns(&mut solution);
        solution.evaluate();
        solution
    }

    /// Runs `iterations` outer iterations and returns the best labeling.
    ///
    /// Repeated calls continue from the current pheromones and best.
    /// With zero iterations the current best is returned unchanged.
    pub fn run(&mut self, iterations: usize) -> AcoResult {
        info!(
            vertices = self.graph.order(),
            ants = self.config.ant_count,
            iterations,
            "ant colony started"
        );

        let mut weight_history = Vec::with_capacity(iterations);
        let mut pheromone_resets = 0;

        for iteration in 0..iterations {
            let mut iteration_best: Option<Labeling> = None;
            for _ in 0..self.config.ant_count {
                let ant = self.build_ant();
                if iteration_best
                    .as_ref()
                    .map_or(true, |b| ant.weight() < b.weight())
                {
                    iteration_best = Some(ant);
                }
            }
            let Some(current) = iteration_best else {
                break;
            };

            if current.weight() < self.best.weight() {
                self.best = current.clone();
            }

            self.pheromone
                .update(&current, &self.best, self.config.evaporation_rate);
            self.convergence = self.pheromone.convergence_factor();
            if self.convergence > self.config.convergence_threshold {
                self.pheromone.reset();
                pheromone_resets += 1;
            }

            debug!(
                iteration = iteration + 1,
                iteration_best = current.weight(),
                best = self.best.weight(),
                convergence = self.convergence,
                "iteration complete"
            );

            self.iteration_best = Some(current);
            weight_history.push(self.best.weight());
        }

        info!(weight = self.best.weight(), "ant colony finished");

        AcoResult {
            best: self.best.clone(),
            best_weight: self.best.weight(),
            iterations: weight_history.len(),
            weight_history,
            pheromone_resets,
        }
    }
}

/// `label` on every live vertex; ids of removed vertices get 2, the label
/// repair gives them.
fn initial_labeling(graph: &Graph, label: Label) -> Labeling {
    let labels = (0..graph.capacity())
        .map(|v| if graph.vertex_exists(v) { label } else { Label::Two })
        .collect();
    Labeling::from_labels(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::RvnsConfig;
    use crate::random::create_rng;

    fn path(n: usize) -> Graph {
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        Graph::from_edges(n, false, &edges).unwrap()
    }

    fn quick_config(seed: u64) -> AcoConfig {
        AcoConfig::default()
            .with_ant_count(4)
            .with_rvns(RvnsConfig::default().with_max_iterations(20))
            .with_seed(seed)
    }

    #[test]
    fn test_new_rejects_empty_graph() {
        let g = Graph::new(0, false);
        assert!(matches!(
            AntColony::new(&g, AcoConfig::default()),
            Err(DrdError::EmptyGraph)
        ));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let g = path(3);
        let config = AcoConfig::default().with_ant_count(0);
        assert!(matches!(
            AntColony::new(&g, config),
            Err(DrdError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_iterations_returns_all_three() {
        let g = path(5);
        let mut aco = AntColony::new(&g, quick_config(1)).unwrap();
        let result = aco.run(0);
        assert_eq!(result.best.values(), vec![3; 5]);
        assert_eq!(result.best_weight, 15);
        assert_eq!(result.iterations, 0);
        assert!(result.weight_history.is_empty());
    }

    #[test]
    fn test_star_reaches_optimum() {
        let edges: Vec<(usize, usize)> = (1..=6).map(|l| (0, l)).collect();
        let g = Graph::from_edges(7, false, &edges).unwrap();
        let config = quick_config(42).with_ant_count(10);
        let mut aco = AntColony::new(&g, config).unwrap();
        let result = aco.run(5);
        assert_eq!(result.best_weight, 3);
        assert_eq!(result.best.label(0), Label::Three);
    }

    #[test]
    fn test_path_result_feasible_and_light() {
        let g = path(4);
        let mut aco = AntColony::new(&g, quick_config(42)).unwrap();
        let result = aco.run(5);
        assert!(result.best.is_feasible(&g));
        assert!(result.best.is_complete());
        assert!(result.best_weight <= 6);
        assert!(result.best_weight >= 5);
    }

    #[test]
    fn test_random_graph_feasible_and_history_monotone() {
        let g = Graph::random(40, false, 0.08, &mut create_rng(9)).unwrap();
        let snapshot = g.clone();
        let mut aco = AntColony::new(&g, quick_config(7)).unwrap();
        let result = aco.run(5);

        assert!(result.best.is_feasible(&g));
        assert!(result.best.is_complete());
        assert_eq!(result.weight_history.len(), 5);
        for w in result.weight_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
        assert_eq!(*result.weight_history.last().unwrap(), result.best_weight);
        assert!(result.best_weight < 3 * 40);
        assert_eq!(g, snapshot);
    }

    #[test]
    fn test_directed_graph_feasible() {
        let g = Graph::random(25, true, 0.1, &mut create_rng(4)).unwrap();
        let mut aco = AntColony::new(&g, quick_config(4)).unwrap();
        let result = aco.run(3);
        assert!(result.best.is_feasible(&g));
    }

    #[test]
    fn test_deterministic_with_seed() {
        let g = Graph::random(30, false, 0.1, &mut create_rng(2)).unwrap();
        let r1 = AntColony::new(&g, quick_config(77)).unwrap().run(3);
        let r2 = AntColony::new(&g, quick_config(77)).unwrap().run(3);
        assert_eq!(r1.best, r2.best);
        assert_eq!(r1.weight_history, r2.weight_history);
    }

    #[test]
    fn test_pheromones_follow_best_threes() {
        let edges: Vec<(usize, usize)> = (1..=6).map(|l| (0, l)).collect();
        let g = Graph::from_edges(7, false, &edges).unwrap();
        let mut aco = AntColony::new(&g, quick_config(5).with_ant_count(10)).unwrap();
        aco.run(4);

        let tau = aco.pheromone();
        // The center carries the only 3 of the optimum.
        for leaf in 1..=6 {
            assert!(tau.get(0) > tau.get(leaf));
        }
        assert!(aco.iteration_best().is_some());
    }

    #[test]
    fn test_convergence_triggers_reset() {
        let edges: Vec<(usize, usize)> = (1..=6).map(|l| (0, l)).collect();
        let g = Graph::from_edges(7, false, &edges).unwrap();
        let config = quick_config(8)
            .with_ant_count(10)
            .with_evaporation_rate(1.0);
        let mut aco = AntColony::new(&g, config).unwrap();

        // With full smoothing the table jumps to {0, 1} once the optimum
        // is both iteration best and best so far.
        let result = aco.run(4);
        assert!(result.pheromone_resets >= 1);
        assert!(aco.pheromone().values().iter().all(|&t| t <= 1.0 && t >= 0.0));
    }

    #[test]
    fn test_removed_vertex_ids() {
        let mut g = path(5);
        g.delete_vertex(4);
        let mut aco = AntColony::new(&g, quick_config(3)).unwrap();
        let result = aco.run(2);
        assert_eq!(result.best.len(), 5);
        assert_eq!(result.best.label(4), Label::Two);
        assert!(result.best.is_feasible(&g));
    }
}
