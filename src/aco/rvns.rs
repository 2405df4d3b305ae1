//! Reduced Variable Neighborhood Search applied to each ant's solution.
//!
//! # Algorithm
//!
//! 1. k = 1
//! 2. Copy the incumbent, destroy with rate(k), construct, extend, reduce
//! 3. If the candidate is strictly lighter, it becomes the incumbent and
//!    k = 1; otherwise k = k + 1, wrapping to 1 after the last neighborhood
//! 4. Stop after `max_iterations` rounds or `max_no_improve` consecutive
//!    rounds without improvement
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use super::runner::AntColony;
use crate::labeling::Labeling;
use tracing::trace;

impl AntColony<'_> {
    /// Improves `solution` in place. Returns the number of rounds run.
    ///
    /// The round budget applies per call. The result is never heavier
    /// than the input.
    pub fn rvns(&mut self, solution: &mut Labeling) -> usize {
        let rvns = self.config.rvns;
        let mut k = 1;
        let mut no_improve = 0;
        let mut rounds = 0;

        while rounds < rvns.max_iterations && no_improve < rvns.max_no_improve {
            let mut candidate = solution.clone();
            self.destroy(&mut candidate, k);
            self.construct(&mut candidate);
            self.extend(&mut candidate);
            self.reduce(&mut candidate);
            rounds += 1;

            if candidate.weight() < solution.weight() {
                trace!(
                    round = rounds,
                    neighborhood = k,
                    weight = candidate.weight(),
                    "rvns improvement"
                );
                *solution = candidate;
                k = 1;
                no_improve = 0;
            } else {
                no_improve += 1;
                k += 1;
                if k > rvns.neighborhood_count {
                    k = 1;
                }
            }
        }
        rounds
    }
}
