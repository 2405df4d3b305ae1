//! Construction heuristics that seed the GA population.
//!
//! Each heuristic consumes a private copy of the graph: it repeatedly
//! labels a vertex 3, marks its still-unassigned neighbors 0 and deletes
//! the closed neighborhood, until the copy is empty.
//!
//! Any closure `Fn(&Graph, &mut DrdRng) -> Labeling` is also accepted
//! wherever a [`ConstructionHeuristic`] is expected.

use crate::error::{DrdError, Result};
use crate::graph::Graph;
use crate::labeling::{Label, Labeling};
use crate::random::DrdRng;
use rand::seq::IteratorRandom;

/// Builds an initial labeling from a graph.
pub trait ConstructionHeuristic {
    /// Human-readable name used in logs.
    fn name(&self) -> &str {
        "custom"
    }

    /// Produces a labeling with one gene per vertex id of `graph`.
    fn construct(&self, graph: &Graph, rng: &mut DrdRng) -> Labeling;
}

impl<F> ConstructionHeuristic for F
where
    F: Fn(&Graph, &mut DrdRng) -> Labeling,
{
    fn construct(&self, graph: &Graph, rng: &mut DrdRng) -> Labeling {
        self(graph, rng)
    }
}

/// The three built-in heuristics, selectable by number (1–3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// (1) Random live vertex each step; a single leftover vertex gets 3.
    #[default]
    RandomCover,
    /// (2) Random live vertex each step; isolated leftovers get 2.
    RandomCoverIsolated,
    /// (3) Vertices by descending degree; isolated leftovers get 2.
    DegreeGreedy,
}

impl Heuristic {
    /// Maps the selector `1..=3` to a heuristic.
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Heuristic::RandomCover),
            2 => Ok(Heuristic::RandomCoverIsolated),
            3 => Ok(Heuristic::DegreeGreedy),
            other => Err(DrdError::UnknownHeuristic(other)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Heuristic::RandomCover => 1,
            Heuristic::RandomCoverIsolated => 2,
            Heuristic::DegreeGreedy => 3,
        }
    }
}

impl ConstructionHeuristic for Heuristic {
    fn name(&self) -> &str {
        match self {
            Heuristic::RandomCover => "random-cover",
            Heuristic::RandomCoverIsolated => "random-cover-isolated",
            Heuristic::DegreeGreedy => "degree-greedy",
        }
    }

    fn construct(&self, graph: &Graph, rng: &mut DrdRng) -> Labeling {
        match self {
            Heuristic::RandomCover => random_cover(graph, rng, false),
            Heuristic::RandomCoverIsolated => random_cover(graph, rng, true),
            Heuristic::DegreeGreedy => degree_greedy(graph),
        }
    }
}

/// Labels `v` with 3, its unassigned neighbors in `work` with 0, and
/// removes the closed neighborhood of `v` from `work`.
pub(crate) fn cover(work: &mut Graph, solution: &mut Labeling, v: usize) {
    solution.set(v, Label::Three);
    for &n in work.adjacency(v) {
        if solution.label(n) == Label::Unassigned {
            solution.set(n, Label::Zero);
        }
    }
    work.delete_closed_neighborhood(v);
}

/// Labels every isolated live vertex of `work` with 2 and removes it.
fn settle_isolated(work: &mut Graph, solution: &mut Labeling) {
    let isolated: Vec<usize> = work.vertices().filter(|&v| work.degree(v) == 0).collect();
    for v in isolated {
        solution.set(v, Label::Two);
        work.delete_vertex(v);
    }
}

fn random_cover(graph: &Graph, rng: &mut DrdRng, isolated_twos: bool) -> Labeling {
    let mut work = graph.clone();
    let mut solution = Labeling::unassigned(graph.capacity());

    loop {
        let Some(v) = work.vertices().choose(rng) else {
            break;
        };
        cover(&mut work, &mut solution, v);

        if isolated_twos {
            settle_isolated(&mut work, &mut solution);
        } else if work.order() == 1 {
            let last = work.vertices().next();
            if let Some(last) = last {
                solution.set(last, Label::Three);
                work.delete_vertex(last);
            }
        }
    }
    solution
}

fn degree_greedy(graph: &Graph) -> Labeling {
    let mut work = graph.clone();
    let mut solution = Labeling::unassigned(graph.capacity());

    let mut order: Vec<usize> = graph.vertices().collect();
    order.sort_by(|&a, &b| graph.degree(b).cmp(&graph.degree(a)));

    for v in order {
        if work.is_empty() {
            break;
        }
        if !work.vertex_exists(v) {
            continue;
        }
        cover(&mut work, &mut solution, v);
        settle_isolated(&mut work, &mut solution);
    }
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn star(leaves: usize) -> Graph {
        let edges: Vec<(usize, usize)> = (1..=leaves).map(|l| (0, l)).collect();
        Graph::from_edges(leaves + 1, false, &edges).unwrap()
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Heuristic::from_id(1).unwrap(), Heuristic::RandomCover);
        assert_eq!(Heuristic::from_id(2).unwrap(), Heuristic::RandomCoverIsolated);
        assert_eq!(Heuristic::from_id(3).unwrap(), Heuristic::DegreeGreedy);
        assert!(matches!(
            Heuristic::from_id(4),
            Err(DrdError::UnknownHeuristic(4))
        ));
        for h in [
            Heuristic::RandomCover,
            Heuristic::RandomCoverIsolated,
            Heuristic::DegreeGreedy,
        ] {
            assert_eq!(Heuristic::from_id(h.id()).unwrap(), h);
        }
    }

    #[test]
    fn test_degree_greedy_star_is_optimal() {
        let g = star(6);
        let l = Heuristic::DegreeGreedy.construct(&g, &mut create_rng(0));
        assert_eq!(l.label(0), Label::Three);
        assert_eq!(l.count(Label::Zero), 6);
        assert_eq!(l.weight(), 3);
    }

    #[test]
    fn test_degree_greedy_isolated_vertex_gets_two() {
        let g = Graph::from_edges(4, false, &[(0, 1), (0, 2)]).unwrap();
        let l = Heuristic::DegreeGreedy.construct(&g, &mut create_rng(0));
        assert_eq!(l.values(), vec![3, 0, 0, 2]);
    }

    #[test]
    fn test_all_heuristics_complete_and_feasible() {
        let mut rng = create_rng(42);
        for seed in 0..20u64 {
            let g = Graph::random(25, false, 0.15, &mut create_rng(seed)).unwrap();
            for h in [
                Heuristic::RandomCover,
                Heuristic::RandomCoverIsolated,
                Heuristic::DegreeGreedy,
            ] {
                let l = h.construct(&g, &mut rng);
                assert_eq!(l.len(), 25);
                assert!(l.is_complete(), "{} left vertices unassigned", h.name());
                assert!(l.is_feasible(&g), "{} produced infeasible {l}", h.name());
            }
        }
    }

    #[test]
    fn test_random_cover_single_leftover_gets_three() {
        // Vertex 2 is isolated: either drawn directly or left as the lone
        // survivor, and labeled 3 both ways.
        let g = Graph::from_edges(3, false, &[(0, 1)]).unwrap();
        for seed in 0..10u64 {
            let l = Heuristic::RandomCover.construct(&g, &mut create_rng(seed));
            assert!(l.is_complete());
            assert!(l.is_feasible(&g));
            assert_eq!(l.label(2), Label::Three);
        }
    }

    #[test]
    fn test_heuristics_feasible_on_directed_graphs() {
        let mut rng = create_rng(7);
        for seed in 0..10u64 {
            let g = Graph::random(25, true, 0.1, &mut create_rng(seed)).unwrap();
            for h in [
                Heuristic::RandomCover,
                Heuristic::RandomCoverIsolated,
                Heuristic::DegreeGreedy,
            ] {
                let l = h.construct(&g, &mut rng);
                assert!(l.is_complete(), "{} left vertices unassigned", h.name());
                assert!(l.is_feasible(&g), "{} produced infeasible {l}", h.name());
            }
        }
    }

    #[test]
    fn test_heuristic_does_not_mutate_graph() {
        let g = star(4);
        let before = g.clone();
        Heuristic::RandomCover.construct(&g, &mut create_rng(3));
        assert_eq!(g, before);
    }

    #[test]
    fn test_closure_heuristic() {
        let all_twos = |g: &Graph, _rng: &mut DrdRng| Labeling::uniform(g.capacity(), Label::Two);
        let g = star(3);
        let l = all_twos.construct(&g, &mut create_rng(0));
        assert_eq!(l.weight(), 8);
        assert_eq!(all_twos.name(), "custom");
    }
}
