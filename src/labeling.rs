//! Vertex labelings (chromosomes) and the Double Roman feasibility rules.
//!
//! A [`Labeling`] assigns one [`Label`] per vertex id. It is a plain value:
//! feasibility checks and repair borrow the [`Graph`] explicitly instead of
//! keeping a pointer to it, so a labeling can outlive any working copy.
//!
//! Feasibility: every vertex labeled `0` has at least one neighbor labeled
//! `3`. Vertices labeled `2` cover themselves. On directed graphs a 3 at `u`
//! dominates the heads of its out-arcs, so a 0 at `v` needs an arc `u -> v`
//! from a vertex labeled 3.

use crate::error::{DrdError, Result};
use crate::graph::Graph;
use std::fmt;

/// Per-vertex label in the working domain `{-1, 0, 2, 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// Not yet decided (`-1`).
    #[default]
    Unassigned,
    /// Dominated by a neighbor labeled 3.
    Zero,
    /// Self-sufficient.
    Two,
    /// Dominates itself and its neighbors.
    Three,
}

impl Label {
    /// Integer weight of the label.
    pub fn value(self) -> i32 {
        match self {
            Label::Unassigned => -1,
            Label::Zero => 0,
            Label::Two => 2,
            Label::Three => 3,
        }
    }
}

impl TryFrom<i32> for Label {
    type Error = DrdError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            -1 => Ok(Label::Unassigned),
            0 => Ok(Label::Zero),
            2 => Ok(Label::Two),
            3 => Ok(Label::Three),
            other => Err(DrdError::InvalidLabel(other)),
        }
    }
}

/// A candidate labeling with a lazily cached fitness (total weight).
///
/// Lower fitness is better.
///
/// # Examples
///
/// ```
/// use u_drdom::graph::Graph;
/// use u_drdom::labeling::Labeling;
///
/// let path = Graph::from_edges(4, false, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// let mut l = Labeling::from_values(&[3, 0, 2, 0]).unwrap();
/// assert!(!l.is_feasible(&path));
///
/// l.repair(&path);
/// assert_eq!(l.values(), vec![3, 0, 2, 2]);
/// assert_eq!(l.weight(), 7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Labeling {
    labels: Vec<Label>,
    fitness: Option<i64>,
}

impl PartialEq for Labeling {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl Eq for Labeling {}

impl Labeling {
    /// All vertices unassigned.
    pub fn unassigned(len: usize) -> Self {
        Self::uniform(len, Label::Unassigned)
    }

    /// Every vertex carries `label`.
    pub fn uniform(len: usize, label: Label) -> Self {
        Self::from_labels(vec![label; len])
    }

    pub fn from_labels(labels: Vec<Label>) -> Self {
        Self {
            labels,
            fitness: None,
        }
    }

    /// Builds a labeling from integer labels.
    ///
    /// # Errors
    /// `InvalidLabel` for anything outside `{-1, 0, 2, 3}`.
    pub fn from_values(values: &[i32]) -> Result<Self> {
        let labels = values
            .iter()
            .map(|&v| Label::try_from(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_labels(labels))
    }

    /// Concatenates two gene subsequences into one labeling.
    pub fn spliced(first: &[Label], second: &[Label]) -> Self {
        let mut labels = Vec::with_capacity(first.len() + second.len());
        labels.extend_from_slice(first);
        labels.extend_from_slice(second);
        Self::from_labels(labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Mutable access to the genes; drops the cached fitness.
    pub fn labels_mut(&mut self) -> &mut [Label] {
        self.fitness = None;
        &mut self.labels
    }

    pub fn label(&self, v: usize) -> Label {
        self.labels[v]
    }

    pub fn set(&mut self, v: usize, label: Label) {
        if self.labels[v] != label {
            self.labels[v] = label;
            self.fitness = None;
        }
    }

    /// Integer label vector.
    pub fn values(&self) -> Vec<i32> {
        self.labels.iter().map(|l| l.value()).collect()
    }

    /// Sum of all labels. Uses the cached value when present.
    pub fn weight(&self) -> i64 {
        self.fitness
            .unwrap_or_else(|| self.labels.iter().map(|l| l.value() as i64).sum())
    }

    /// Computes and caches the fitness.
    pub fn evaluate(&mut self) -> i64 {
        let w = self.weight();
        self.fitness = Some(w);
        w
    }

    /// The cached fitness, if it is still valid.
    pub fn cached_fitness(&self) -> Option<i64> {
        self.fitness
    }

    pub fn count(&self, label: Label) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }

    /// True when no vertex is left unassigned.
    pub fn is_complete(&self) -> bool {
        !self.labels.contains(&Label::Unassigned)
    }

    /// Fails with `GeneCountMismatch` unless one gene exists per vertex id.
    pub fn check_len(&self, graph: &Graph) -> Result<()> {
        if self.len() == graph.capacity() {
            Ok(())
        } else {
            Err(DrdError::GeneCountMismatch {
                expected: graph.capacity(),
                found: self.len(),
            })
        }
    }

    /// Whether a vertex labeled 3 dominates `v`: a neighbor, or on
    /// directed graphs the tail of an arc into `v`.
    pub fn has_three_neighbor(&self, graph: &Graph, v: usize) -> bool {
        if graph.is_directed() {
            graph
                .in_neighbors(v)
                .any(|u| self.labels[u] == Label::Three)
        } else {
            graph
                .adjacency(v)
                .iter()
                .any(|&n| self.labels[n] == Label::Three)
        }
    }

    /// Vertices labeled 0 without a neighbor labeled 3.
    pub fn undominated(&self, graph: &Graph) -> Vec<usize> {
        (0..self.len())
            .filter(|&v| self.labels[v] == Label::Zero && !self.has_three_neighbor(graph, v))
            .collect()
    }

    /// Every vertex labeled 0 has a neighbor labeled 3.
    pub fn is_feasible(&self, graph: &Graph) -> bool {
        (0..self.len())
            .all(|v| self.labels[v] != Label::Zero || self.has_three_neighbor(graph, v))
    }

    /// Feasibility restricted to `v` and the vertices it dominates (its
    /// out-neighbors on directed graphs).
    ///
    /// Equivalent to [`is_feasible`](Self::is_feasible) when the labeling
    /// was feasible before the label of `v` alone changed.
    pub fn is_feasible_around(&self, graph: &Graph, v: usize) -> bool {
        std::iter::once(v)
            .chain(graph.adjacency(v).iter().copied())
            .all(|u| self.labels[u] != Label::Zero || self.has_three_neighbor(graph, u))
    }

    /// Feasibility repair.
    ///
    /// Unassigned vertices are settled to 0, then every 0 without a
    /// neighbor labeled 3 is raised to 2. Returns the number of vertices
    /// raised to 2.
    pub fn repair(&mut self, graph: &Graph) -> usize {
        for l in self.labels.iter_mut() {
            if *l == Label::Unassigned {
                *l = Label::Zero;
            }
        }
        let raised = self.undominated(graph);
        for &v in &raised {
            self.labels[v] = Label::Two;
        }
        self.fitness = None;
        raised.len()
    }
}

impl fmt::Display for Labeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for l in &self.labels {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", l.value())?;
            first = false;
        }
        Ok(())
    }
}
