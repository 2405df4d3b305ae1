//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] orchestrates the complete evolutionary process:
//! seeding → (elitism, selection → crossover → mutation → repair) per
//! generation → repeat for a fixed number of generations.

use super::config::GaConfig;
use super::operators::{mutate, SegmentSwap};
use super::types::CrossoverStrategy;
use crate::error::{DrdError, Result};
use crate::graph::Graph;
use crate::heuristics::ConstructionHeuristic;
use crate::labeling::Labeling;
use crate::random::{rng_from_option, DrdRng};
use tracing::{debug, info};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The lightest labeling seen during the whole run.
    pub best: Labeling,

    /// Weight of `best`.
    pub best_weight: i64,

    /// Number of generations executed.
    pub generations: usize,

    /// Running best weight: initial population, then one entry per generation.
    pub weight_history: Vec<i64>,
}

/// Population-based search for light feasible labelings.
///
/// The engine borrows the graph read-only and owns its population and its
/// random generator.
///
/// # Usage
///
/// ```
/// use u_drdom::ga::{GaConfig, GeneticAlgorithm};
/// use u_drdom::graph::Graph;
/// use u_drdom::heuristics::Heuristic;
///
/// let graph = Graph::from_edges(5, false, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(5)
///     .with_seed(42);
///
/// let mut ga = GeneticAlgorithm::new(&graph, config).unwrap();
/// let result = ga.run(Some(&Heuristic::DegreeGreedy)).unwrap();
/// assert_eq!(result.best_weight, 3);
/// ```
pub struct GeneticAlgorithm<'g> {
    graph: &'g Graph,
    config: GaConfig,
    population: Vec<Labeling>,
    crossover: Box<dyn CrossoverStrategy + 'g>,
    rng: DrdRng,
}

impl<'g> GeneticAlgorithm<'g> {
    /// Creates an engine over `graph`.
    ///
    /// # Errors
    /// `EmptyGraph` for a graph without vertices, `InvalidConfig` when
    /// [`GaConfig::validate`] fails.
    pub fn new(graph: &'g Graph, config: GaConfig) -> Result<Self> {
        if graph.is_empty() {
            return Err(DrdError::EmptyGraph);
        }
        config.validate().map_err(DrdError::InvalidConfig)?;

        let rng = rng_from_option(config.seed);
        Ok(Self {
            graph,
            population: Vec::with_capacity(config.population_size),
            config,
            crossover: Box::new(SegmentSwap),
            rng,
        })
    }

    /// Replaces the default [`SegmentSwap`] recombination.
    pub fn with_crossover<C: CrossoverStrategy + 'g>(mut self, crossover: C) -> Self {
        self.crossover = Box::new(crossover);
        self
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Current population (empty before the first run).
    pub fn population(&self) -> &[Labeling] {
        &self.population
    }

    /// Number of genes per individual, equal to the graph's vertex id range.
    pub fn genes_size(&self) -> usize {
        self.graph.capacity()
    }

    /// Builds the initial population.
    ///
    /// With a heuristic, one seed labeling is constructed and cloned into
    /// every slot (or one labeling per slot when `diverse_seeding` is on).
    /// Without one, every individual starts fully unassigned. Each
    /// individual is then repaired independently and evaluated.
    ///
    /// # Errors
    /// `GeneCountMismatch` if the heuristic returns a labeling of the wrong
    /// length.
    pub fn create_population(
        &mut self,
        heuristic: Option<&dyn ConstructionHeuristic>,
    ) -> Result<()> {
        let size = self.config.population_size;
        self.population.clear();

        match heuristic {
            Some(h) if self.config.diverse_seeding => {
                for _ in 0..size {
                    let seed = h.construct(self.graph, &mut self.rng);
                    seed.check_len(self.graph)?;
                    self.population.push(seed);
                }
            }
            Some(h) => {
                let seed = h.construct(self.graph, &mut self.rng);
                seed.check_len(self.graph)?;
                self.population.resize(size, seed);
            }
            None => {
                self.population
                    .resize(size, Labeling::unassigned(self.genes_size()));
            }
        }

        for individual in &mut self.population {
            individual.repair(self.graph);
            individual.evaluate();
        }
        Ok(())
    }

    /// Runs the configured number of generations.
    pub fn run(&mut self, heuristic: Option<&dyn ConstructionHeuristic>) -> Result<GaResult> {
        info!(
            vertices = self.graph.order(),
            population = self.config.population_size,
            generations = self.config.max_generations,
            heuristic = heuristic.map(|h| h.name()).unwrap_or("none"),
            crossover = self.crossover.name(),
            "genetic algorithm started"
        );

        self.create_population(heuristic)?;

        let mut best = self.population[best_index(&self.population)].clone();
        let mut weight_history = Vec::with_capacity(self.config.max_generations + 1);
        weight_history.push(best.weight());

        for generation in 0..self.config.max_generations {
            self.population = self.next_generation()?;

            let gen_best = &self.population[best_index(&self.population)];
            if gen_best.weight() < best.weight() {
                best = gen_best.clone();
            }
            weight_history.push(best.weight());

            debug!(
                generation = generation + 1,
                generation_best = gen_best.weight(),
                best = best.weight(),
                "generation complete"
            );
        }

        info!(weight = best.weight(), "genetic algorithm finished");

        Ok(GaResult {
            best_weight: best.weight(),
            best,
            generations: self.config.max_generations,
            weight_history,
        })
    }

    /// Builds the next population: elite copies of the current best, then
    /// one offspring per reproduction round until the population is full.
    fn next_generation(&mut self) -> Result<Vec<Labeling>> {
        let size = self.config.population_size;
        let elite_count = self.config.elite_count();
        let mut next = Vec::with_capacity(size);

        if elite_count > 0 {
            let elite = &self.population[best_index(&self.population)];
            next.extend(std::iter::repeat(elite).take(elite_count).cloned());
        }

        while next.len() < size {
            let mut pool: Vec<usize> = (0..self.population.len()).collect();
            let first = self
                .config
                .first_selection
                .select(&self.population, &mut pool, &mut self.rng);
            let second = self
                .config
                .second_selection
                .select(&self.population, &mut pool, &mut self.rng);

            let mut child = self.crossover.crossover(
                self.graph,
                &self.population[first],
                &self.population[second],
                &mut self.rng,
            );
            child.check_len(self.graph)?;

            mutate(&mut child, self.config.mutation_rate, &mut self.rng);
            child.repair(self.graph);
            child.evaluate();
            next.push(child);
        }

        Ok(next)
    }
}

/// Index of the lightest individual; ties keep the earliest.
fn best_index(population: &[Labeling]) -> usize {
    population
        .iter()
        .enumerate()
        .min_by_key(|(_, l)| l.weight())
        .map(|(i, _)| i)
        .unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================
