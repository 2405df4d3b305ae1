//! Strategy seam for recombination.
//!
//! The GA delegates offspring creation to a [`CrossoverStrategy`]. The
//! default is [`SegmentSwap`](super::operators::SegmentSwap); any closure
//! with the signature `Fn(&Graph, &Labeling, &Labeling, &mut DrdRng) -> Labeling`
//! can be plugged in instead.

use crate::graph::Graph;
use crate::labeling::Labeling;
use crate::random::DrdRng;

/// Produces one offspring from two parents.
///
/// Parents are borrowed immutably; the population they come from is
/// never modified by recombination. The runner mutates and repairs
/// whatever labeling is returned, so a strategy may return an infeasible
/// child, but it must have one gene per vertex id.
pub trait CrossoverStrategy {
    /// Human-readable name used in logs.
    fn name(&self) -> &str {
        "custom"
    }

    fn crossover(
        &self,
        graph: &Graph,
        first: &Labeling,
        second: &Labeling,
        rng: &mut DrdRng,
    ) -> Labeling;
}

impl<F> CrossoverStrategy for F
where
    F: Fn(&Graph, &Labeling, &Labeling, &mut DrdRng) -> Labeling,
{
    fn crossover(
        &self,
        graph: &Graph,
        first: &Labeling,
        second: &Labeling,
        rng: &mut DrdRng,
    ) -> Labeling {
        self(graph, first, second, rng)
    }
}
