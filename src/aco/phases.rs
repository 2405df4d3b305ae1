//! Per-ant solution phases: construct, extend, reduce, destroy.
//!
//! Construction and destruction consume a private working copy of the
//! graph. Vertex choice is biased by `degree × pheromone`: with the
//! configured greedy probability the most attractive vertex is taken,
//! otherwise a uniform one.

use super::pheromone::PheromoneTable;
use super::runner::AntColony;
use crate::graph::Graph;
use crate::heuristics::cover;
use crate::labeling::{Label, Labeling};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Key of the candidate with the largest positive score.
///
/// Ties keep the earliest candidate. `None` when every score is zero.
fn most_attractive(candidates: impl Iterator<Item = (usize, f64)>) -> Option<usize> {
    let mut best = None;
    let mut best_score = 0.0;
    for (key, score) in candidates {
        if score > best_score {
            best_score = score;
            best = Some(key);
        }
    }
    best
}

fn attractiveness(pheromone: &PheromoneTable, degree: usize, v: usize) -> f64 {
    degree as f64 * pheromone.get(v)
}

impl AntColony<'_> {
    /// Picks a live vertex of `work`, or `None` once it is empty.
    fn choose_live(&mut self, work: &Graph, greedy: f64) -> Option<usize> {
        if greedy > 0.0 && self.rng.random_bool(greedy) {
            let pheromone = &self.pheromone;
            let pick = most_attractive(
                work.vertices()
                    .map(|v| (v, attractiveness(pheromone, work.degree(v), v))),
            );
            if pick.is_some() {
                return pick;
            }
        }
        work.vertices().choose(&mut self.rng)
    }

    /// Completes a partial labeling.
    ///
    /// Labels already present are honored first: every 3 covers its
    /// closed neighborhood (unassigned neighbors become 0) and every 2
    /// removes itself. The remaining live vertices are then covered one
    /// at a time: the chosen vertex gets 3, its unassigned neighbors 0.
    pub fn construct(&mut self, solution: &mut Labeling) {
        let graph = self.graph;
        let mut work = graph.clone();

        for v in 0..solution.len() {
            match solution.label(v) {
                Label::Three => {
                    for &n in graph.adjacency(v) {
                        if solution.label(n) == Label::Unassigned {
                            solution.set(n, Label::Zero);
                        }
                        work.delete_vertex(n);
                    }
                    work.delete_vertex(v);
                }
                Label::Two => work.delete_vertex(v),
                Label::Zero | Label::Unassigned => {}
            }
        }

        let greedy = self.config.construct_greedy_probability;
        loop {
            let Some(v) = self.choose_live(&work, greedy) else {
                break;
            };
            cover(&mut work, solution, v);
        }
    }

    /// Raises `floor(extend_rate × |candidates|)` vertices labeled 0 or 2
    /// to 3. Returns the number raised.
    pub fn extend(&mut self, solution: &mut Labeling) -> usize {
        let graph = self.graph;
        let mut candidates: Vec<usize> = graph
            .vertices()
            .filter(|&v| matches!(solution.label(v), Label::Zero | Label::Two))
            .collect();
        let count = (self.config.extend_rate * candidates.len() as f64) as usize;
        let greedy = self.config.extend_greedy_probability;

        for _ in 0..count {
            let mut pos = None;
            if greedy > 0.0 && self.rng.random_bool(greedy) {
                let pheromone = &self.pheromone;
                pos = most_attractive(candidates.iter().enumerate().map(|(i, &v)| {
                    (i, attractiveness(pheromone, graph.degree(v), v))
                }));
            }
            let pos = pos.unwrap_or_else(|| self.rng.random_range(0..candidates.len()));
            let v = candidates.swap_remove(pos);
            solution.set(v, Label::Three);
        }
        count
    }

    /// Greedy label lowering in ascending-degree order.
    ///
    /// Each still-live vertex labeled 3 or 2 is tried at 0, then at 2, and
    /// keeps the first label that leaves it and the vertices it dominates
    /// covered.
    /// Its closed neighborhood is then removed from the working copy, so
    /// later vertices in that neighborhood are skipped.
    ///
    /// A feasible input stays feasible and never gets heavier.
    pub fn reduce(&mut self, solution: &mut Labeling) {
        let graph = self.graph;
        let mut work = graph.clone();

        let mut order: Vec<usize> = graph.vertices().collect();
        order.sort_by_key(|&v| graph.degree(v));

        for v in order {
            if work.is_empty() {
                break;
            }
            if !work.vertex_exists(v) {
                continue;
            }

            let original = solution.label(v);
            if matches!(original, Label::Three | Label::Two) {
                solution.set(v, Label::Zero);
                if !solution.is_feasible_around(graph, v) {
                    solution.set(v, Label::Two);
                    if !solution.is_feasible_around(graph, v) {
                        solution.set(v, original);
                    }
                }
            }
            work.delete_closed_neighborhood(v);
        }
    }

    /// Unassigns `floor(n × rate(k))` vertices labeled 0 or 2, where
    /// `rate(k)` is the destruction rate of neighborhood `k`.
    ///
    /// Vertices are drawn like in construction; a drawn 3 is skipped
    /// without counting. Stops early when the working copy runs out.
    /// Returns the number of vertices unassigned.
    pub fn destroy(&mut self, solution: &mut Labeling, k: usize) -> usize {
        let rate = self.config.rvns.destruction_rate(k);
        let target = (self.graph.order() as f64 * rate) as usize;
        let greedy = self.config.construct_greedy_probability;
        let mut work = self.graph.clone();
        let mut removed = 0;

        while removed < target {
            let Some(v) = self.choose_live(&work, greedy) else {
                break;
            };
            if matches!(solution.label(v), Label::Zero | Label::Two) {
                solution.set(v, Label::Unassigned);
                removed += 1;
            }
            work.delete_vertex(v);
        }
        removed
    }
}
