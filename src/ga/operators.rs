//! Genetic operators on labelings.
//!
//! # Crossover
//!
//! - [`SegmentSwap`]: exchange the window `[r1, r2]` between the parents,
//!   repair both children, keep the lighter one
//! - [`OnePointSplice`]: splice a prefix of one parent onto the suffix of
//!   the other, repair both children, keep the lighter one
//!
//! # Mutation
//!
//! - [`mutate`]: resample each gene from `{0, 2, 3}` with a fixed probability

use super::types::CrossoverStrategy;
use crate::graph::Graph;
use crate::labeling::{Label, Labeling};
use crate::random::DrdRng;
use rand::Rng;

/// Labels a mutated gene can take.
const MUTATION_DOMAIN: [Label; 3] = [Label::Zero, Label::Two, Label::Three];

/// Draws two cut points `r1 < r2` with `r2 - r1 != 1`.
///
/// Returns `None` when fewer than 3 genes make such a pair impossible.
pub fn cut_points<R: Rng + ?Sized>(genes: usize, rng: &mut R) -> Option<(usize, usize)> {
    if genes < 3 {
        return None;
    }
    loop {
        let a = rng.random_range(0..genes);
        let b = rng.random_range(0..genes);
        let (r1, r2) = if a < b { (a, b) } else { (b, a) };
        if r1 != r2 && r2 - r1 != 1 {
            return Some((r1, r2));
        }
    }
}

/// Exchanges the inclusive window `[r1, r2]` between `a` and `b` in place.
///
/// Returns the window used, or `None` if the labelings are too short to
/// cut (they are then left untouched).
///
/// # Panics
/// Panics if the labelings differ in length.
pub fn segment_swap<R: Rng + ?Sized>(
    a: &mut Labeling,
    b: &mut Labeling,
    rng: &mut R,
) -> Option<(usize, usize)> {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    let (r1, r2) = cut_points(a.len(), rng)?;
    a.labels_mut()[r1..=r2].swap_with_slice(&mut b.labels_mut()[r1..=r2]);
    Some((r1, r2))
}

/// Resamples each gene from `{0, 2, 3}` with probability `rate`.
///
/// Returns the number of genes resampled.
pub fn mutate<R: Rng + ?Sized>(labeling: &mut Labeling, rate: f64, rng: &mut R) -> usize {
    if rate <= 0.0 {
        return 0;
    }
    let mut changed = 0;
    for v in 0..labeling.len() {
        if rng.random_bool(rate) {
            let label = MUTATION_DOMAIN[rng.random_range(0..MUTATION_DOMAIN.len())];
            labeling.set(v, label);
            changed += 1;
        }
    }
    changed
}

/// Returns the lighter of two labelings; ties keep `a`.
fn lighter(a: Labeling, b: Labeling) -> Labeling {
    if b.weight() < a.weight() {
        b
    } else {
        a
    }
}

/// Two-point window exchange followed by repair.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentSwap;

impl CrossoverStrategy for SegmentSwap {
    fn name(&self) -> &str {
        "segment-swap"
    }

    fn crossover(
        &self,
        graph: &Graph,
        first: &Labeling,
        second: &Labeling,
        rng: &mut DrdRng,
    ) -> Labeling {
        let mut a = first.clone();
        let mut b = second.clone();
        segment_swap(&mut a, &mut b, rng);
        a.repair(graph);
        b.repair(graph);
        lighter(a, b)
    }
}

/// One-point splice built with [`Labeling::spliced`], followed by repair.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePointSplice;

impl CrossoverStrategy for OnePointSplice {
    fn name(&self) -> &str {
        "one-point-splice"
    }

    fn crossover(
        &self,
        graph: &Graph,
        first: &Labeling,
        second: &Labeling,
        rng: &mut DrdRng,
    ) -> Labeling {
        let n = first.len();
        let (mut a, mut b) = if n < 2 {
            (first.clone(), second.clone())
        } else {
            let cut = rng.random_range(1..n);
            (
                Labeling::spliced(&first.labels()[..cut], &second.labels()[cut..]),
                Labeling::spliced(&second.labels()[..cut], &first.labels()[cut..]),
            )
        };
        a.repair(graph);
        b.repair(graph);
        lighter(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn path(n: usize) -> Graph {
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        Graph::from_edges(n, false, &edges).unwrap()
    }

    #[test]
    fn test_cut_points_constraints() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (r1, r2) = cut_points(10, &mut rng).unwrap();
            assert!(r1 < r2);
            assert_ne!(r2 - r1, 1);
            assert!(r2 < 10);
        }
    }

    #[test]
    fn test_cut_points_three_genes() {
        let mut rng = create_rng(3);
        assert_eq!(cut_points(3, &mut rng), Some((0, 2)));
        assert_eq!(cut_points(2, &mut rng), None);
        assert_eq!(cut_points(0, &mut rng), None);
    }

    #[test]
    fn test_segment_swap_conserves_window() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let p1 = Labeling::from_values(&[3, 0, 0, 3, 2, 0, 3, 0]).unwrap();
            let p2 = Labeling::from_values(&[0, 3, 2, 2, 0, 3, 0, 2]).unwrap();
            let mut a = p1.clone();
            let mut b = p2.clone();

            let (r1, r2) = segment_swap(&mut a, &mut b, &mut rng).unwrap();

            let mut before: Vec<i32> = p1.values()[r1..=r2].to_vec();
            before.extend_from_slice(&p2.values()[r1..=r2]);
            let mut after: Vec<i32> = a.values()[r1..=r2].to_vec();
            after.extend_from_slice(&b.values()[r1..=r2]);
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);

            assert_eq!(&a.labels()[r1..=r2], &p2.labels()[r1..=r2]);
            assert_eq!(&b.labels()[r1..=r2], &p1.labels()[r1..=r2]);
            assert_eq!(&a.labels()[..r1], &p1.labels()[..r1]);
            assert_eq!(&a.labels()[r2 + 1..], &p1.labels()[r2 + 1..]);
        }
    }

    #[test]
    fn test_segment_swap_short_parents_untouched() {
        let mut a = Labeling::from_values(&[3, 0]).unwrap();
        let mut b = Labeling::from_values(&[0, 3]).unwrap();
        assert!(segment_swap(&mut a, &mut b, &mut create_rng(1)).is_none());
        assert_eq!(a.values(), vec![3, 0]);
        assert_eq!(b.values(), vec![0, 3]);
    }

    #[test]
    fn test_segment_swap_crossover_child_is_feasible() {
        let g = path(8);
        let p1 = Labeling::from_values(&[0, 3, 0, 0, 3, 0, 0, 2]).unwrap();
        let p2 = Labeling::from_values(&[2, 0, 3, 0, 0, 3, 0, 2]).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let child = SegmentSwap.crossover(&g, &p1, &p2, &mut rng);
            assert!(child.is_feasible(&g));
            assert!(child.is_complete());
        }
        // Parents are borrowed, never modified.
        assert_eq!(p1.values(), vec![0, 3, 0, 0, 3, 0, 0, 2]);
    }

    #[test]
    fn test_one_point_splice_child_is_feasible() {
        let g = path(6);
        let p1 = Labeling::from_values(&[0, 3, 0, 0, 3, 0]).unwrap();
        let p2 = Labeling::from_values(&[3, 0, 2, 3, 0, 2]).unwrap();
        let mut rng = create_rng(5);
        for _ in 0..50 {
            let child = OnePointSplice.crossover(&g, &p1, &p2, &mut rng);
            assert_eq!(child.len(), 6);
            assert!(child.is_feasible(&g));
        }
    }

    #[test]
    fn test_mutate_rates() {
        let mut rng = create_rng(42);
        let mut l = Labeling::from_values(&[2; 50]).unwrap();
        assert_eq!(mutate(&mut l, 0.0, &mut rng), 0);
        assert_eq!(l.values(), vec![2; 50]);

        assert_eq!(mutate(&mut l, 1.0, &mut rng), 50);
        assert!(l.is_complete());
        assert!(l.labels().iter().all(|x| *x != Label::Unassigned));
    }
}
