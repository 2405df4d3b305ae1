//! Side-by-side coordinator for the two engines.
//!
//! [`DoubleRomanDomination`] runs the genetic algorithm and the ant
//! colony independently against the same borrowed graph and reports each
//! engine's labeling and weight. It does not pick a winner.

use crate::aco::{AcoConfig, AntColony};
use crate::error::Result;
use crate::ga::{GaConfig, GeneticAlgorithm};
use crate::graph::Graph;
use crate::heuristics::{ConstructionHeuristic, Heuristic};
use crate::labeling::Labeling;
use tracing::info;

/// Best labeling of one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOutcome {
    pub weight: i64,
    pub labeling: Labeling,
}

impl EngineOutcome {
    fn new(labeling: Labeling) -> Self {
        Self {
            weight: labeling.weight(),
            labeling,
        }
    }
}

/// Results of both engines on one graph.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub genetic: EngineOutcome,
    pub ant_colony: EngineOutcome,
}

/// Runs both engines over one graph.
///
/// # Examples
///
/// ```
/// use u_drdom::aco::AcoConfig;
/// use u_drdom::drd::DoubleRomanDomination;
/// use u_drdom::ga::GaConfig;
/// use u_drdom::graph::Graph;
/// use u_drdom::heuristics::Heuristic;
///
/// let graph = Graph::from_edges(4, false, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// let mut drd = DoubleRomanDomination::new(&graph)
///     .with_ga_config(GaConfig::default().with_population_size(10).with_max_generations(5).with_seed(1))
///     .with_aco_config(AcoConfig::default().with_ant_count(3).with_iterations(2).with_seed(1))
///     .with_heuristic(Heuristic::DegreeGreedy);
///
/// let both = drd.run().unwrap();
/// assert!(both.genetic.labeling.is_feasible(&graph));
/// assert!(both.ant_colony.labeling.is_feasible(&graph));
/// ```
pub struct DoubleRomanDomination<'g> {
    graph: &'g Graph,
    ga_config: GaConfig,
    aco_config: AcoConfig,
    heuristic: Option<Heuristic>,
    genetic: Option<EngineOutcome>,
    ant_colony: Option<EngineOutcome>,
}

impl<'g> DoubleRomanDomination<'g> {
    /// Default configurations, no seeding heuristic.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            ga_config: GaConfig::default(),
            aco_config: AcoConfig::default(),
            heuristic: None,
            genetic: None,
            ant_colony: None,
        }
    }

    pub fn with_ga_config(mut self, config: GaConfig) -> Self {
        self.ga_config = config;
        self
    }

    pub fn with_aco_config(mut self, config: AcoConfig) -> Self {
        self.aco_config = config;
        self
    }

    /// Heuristic seeding the GA population.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    /// Runs the genetic algorithm and records its best labeling.
    pub fn run_genetic_algorithm(&mut self) -> Result<&EngineOutcome> {
        let mut ga = GeneticAlgorithm::new(self.graph, self.ga_config.clone())?;
        let heuristic = self.heuristic.as_ref().map(|h| h as &dyn ConstructionHeuristic);
        let result = ga.run(heuristic)?;
        Ok(&*self.genetic.insert(EngineOutcome::new(result.best)))
    }

    /// Runs `iterations` ACO iterations (from the ACO config) and records
    /// the best labeling.
    pub fn run_aco(&mut self) -> Result<&EngineOutcome> {
        let mut colony = AntColony::new(self.graph, self.aco_config.clone())?;
        let result = colony.run(self.aco_config.iterations);
        Ok(&*self.ant_colony.insert(EngineOutcome::new(result.best)))
    }

    /// Runs both engines, the genetic algorithm first.
    pub fn run(&mut self) -> Result<Comparison> {
        info!(
            vertices = self.graph.order(),
            edges = self.graph.size(),
            directed = self.graph.is_directed(),
            "solving double roman domination"
        );
        let genetic = self.run_genetic_algorithm()?.clone();
        let ant_colony = self.run_aco()?.clone();
        info!(
            genetic = genetic.weight,
            ant_colony = ant_colony.weight,
            "both engines finished"
        );
        Ok(Comparison {
            genetic,
            ant_colony,
        })
    }

    /// Outcome of the last GA run.
    pub fn genetic_outcome(&self) -> Option<&EngineOutcome> {
        self.genetic.as_ref()
    }

    /// Outcome of the last ACO run.
    pub fn aco_outcome(&self) -> Option<&EngineOutcome> {
        self.ant_colony.as_ref()
    }

    pub fn ga_weight(&self) -> Option<i64> {
        self.genetic.as_ref().map(|o| o.weight)
    }

    pub fn aco_weight(&self) -> Option<i64> {
        self.ant_colony.as_ref().map(|o| o.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::RvnsConfig;
    use crate::error::DrdError;
    use crate::random::create_rng;

    fn small_configs(seed: u64) -> (GaConfig, AcoConfig) {
        (
            GaConfig::default()
                .with_population_size(20)
                .with_max_generations(10)
                .with_seed(seed),
            AcoConfig::default()
                .with_ant_count(4)
                .with_iterations(3)
                .with_rvns(RvnsConfig::default().with_max_iterations(20))
                .with_seed(seed),
        )
    }

    #[test]
    fn test_run_reports_both_engines() {
        let g = Graph::random(30, false, 0.1, &mut create_rng(42)).unwrap();
        let snapshot = g.clone();
        let (ga, aco) = small_configs(42);
        let mut drd = DoubleRomanDomination::new(&g)
            .with_ga_config(ga)
            .with_aco_config(aco)
            .with_heuristic(Heuristic::RandomCoverIsolated);

        assert!(drd.ga_weight().is_none());
        let both = drd.run().unwrap();

        for outcome in [&both.genetic, &both.ant_colony] {
            assert_eq!(outcome.labeling.len(), 30);
            assert!(outcome.labeling.is_feasible(&g));
            assert_eq!(outcome.weight, outcome.labeling.weight());
        }
        assert_eq!(drd.ga_weight(), Some(both.genetic.weight));
        assert_eq!(drd.aco_weight(), Some(both.ant_colony.weight));
        assert_eq!(drd.genetic_outcome(), Some(&both.genetic));
        assert_eq!(drd.aco_outcome(), Some(&both.ant_colony));
        assert_eq!(g, snapshot);
    }

    #[test]
    fn test_engines_run_separately() {
        let g = Graph::from_edges(5, false, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let (ga, aco) = small_configs(3);
        let mut drd = DoubleRomanDomination::new(&g)
            .with_ga_config(ga)
            .with_aco_config(aco)
            .with_heuristic(Heuristic::DegreeGreedy);

        assert_eq!(drd.run_genetic_algorithm().unwrap().weight, 3);
        assert!(drd.aco_outcome().is_none());
    }

    #[test]
    fn test_degenerate_population_rejected() {
        let g = Graph::from_edges(3, false, &[(0, 1), (1, 2)]).unwrap();
        let mut drd = DoubleRomanDomination::new(&g)
            .with_ga_config(GaConfig::default().with_population_size(1));
        assert!(matches!(
            drd.run_genetic_algorithm(),
            Err(DrdError::InvalidConfig(_))
        ));
        assert!(drd.run().is_err());
    }

    #[test]
    fn test_empty_graph_rejected() {
        let g = Graph::new(0, false);
        let mut drd = DoubleRomanDomination::new(&g);
        assert!(matches!(drd.run_aco(), Err(DrdError::EmptyGraph)));
    }
}
