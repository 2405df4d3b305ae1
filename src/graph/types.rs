//! The mutable graph used as search substrate.

use crate::error::{DrdError, Result};
use rand::Rng;
use std::fmt;

/// An adjacency-list graph whose vertices can be deleted in place.
///
/// Vertex ids are fixed at construction (`0..capacity()`); deletion only
/// flips an alive flag and severs incident arcs, so ids stay stable while
/// a working copy shrinks.
///
/// `size` counts arcs: an undirected edge contributes 2, a directed arc 1.
/// Every mutating operation keeps `size` equal to the number of arcs held in
/// the adjacency lists of live vertices.
///
/// # Examples
///
/// ```
/// use u_drdom::graph::Graph;
///
/// let mut g = Graph::from_edges(4, false, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// assert_eq!(g.size(), 6);
///
/// g.delete_closed_neighborhood(1);
/// assert_eq!(g.order(), 1);
/// assert!(g.vertex_exists(3));
/// assert_eq!(g.degree(3), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    alive: Vec<bool>,
    order: usize,
    size: usize,
    directed: bool,
}

impl Graph {
    /// Creates a graph with `order` isolated vertices.
    pub fn new(order: usize, directed: bool) -> Self {
        Self {
            adjacency: vec![Vec::new(); order],
            alive: vec![true; order],
            order,
            size: 0,
            directed,
        }
    }

    /// Builds a graph from an edge list.
    ///
    /// Repeated edges are ignored. Self-loops and out-of-range ids are
    /// rejected.
    pub fn from_edges(order: usize, directed: bool, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(order, directed);
        for &(u, v) in edges {
            graph.check_vertex(u)?;
            graph.check_vertex(v)?;
            if u == v {
                return Err(DrdError::SelfLoop(u));
            }
            if !graph.edge_exists(u, v) {
                graph.add_edge(u, v);
            }
        }
        Ok(graph)
    }

    /// Generates a G(n, p) graph in which every vertex gets at least one
    /// outgoing edge to a uniformly chosen other vertex.
    ///
    /// For each vertex `i`, one random partner is connected first, then every
    /// `j > i` not yet adjacent is connected with probability `p`.
    ///
    /// # Errors
    /// `EmptyGraph` when `order < 2` (no partner exists),
    /// `InvalidProbability` when `p` is outside `[0, 1]`.
    pub fn random<R: Rng + ?Sized>(
        order: usize,
        directed: bool,
        edge_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if order < 2 {
            return Err(DrdError::EmptyGraph);
        }
        if !(0.0..=1.0).contains(&edge_probability) {
            return Err(DrdError::InvalidProbability(edge_probability));
        }

        let mut graph = Self::new(order, directed);
        for i in 0..order {
            let mut partner = rng.random_range(0..order);
            while partner == i {
                partner = rng.random_range(0..order);
            }
            if !graph.edge_exists(i, partner) {
                graph.add_edge(i, partner);
            }

            for j in (i + 1)..order {
                if !graph.edge_exists(i, j) && rng.random_bool(edge_probability) {
                    graph.add_edge(i, j);
                }
            }
        }
        Ok(graph)
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.capacity() {
            Ok(())
        } else {
            Err(DrdError::VertexOutOfRange {
                vertex: v,
                order: self.capacity(),
            })
        }
    }

    /// Number of live vertices.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of live arcs.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Upper bound (exclusive) on vertex ids, i.e. the order at construction.
    pub fn capacity(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    pub fn vertex_exists(&self, v: usize) -> bool {
        self.alive.get(v).copied().unwrap_or(false)
    }

    /// Current neighbor list of `v`; empty for removed or unknown ids.
    pub fn adjacency(&self, v: usize) -> &[usize] {
        if self.vertex_exists(v) {
            &self.adjacency[v]
        } else {
            &[]
        }
    }

    /// Live vertices `u` with an arc `u -> v`.
    ///
    /// Matches [`adjacency`](Self::adjacency) on undirected graphs; on
    /// directed graphs every adjacency list is scanned.
    pub fn in_neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices()
            .filter(move |&u| u != v && self.adjacency[u].contains(&v))
    }

    /// Out-degree of `v` in the current graph (0 for removed vertices).
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency(v).len()
    }

    /// Iterates over live vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter_map(|(v, &alive)| alive.then_some(v))
    }

    /// Whether the arc `u -> v` is present.
    pub fn edge_exists(&self, u: usize, v: usize) -> bool {
        self.adjacency(u).contains(&v)
    }

    /// Inserts an edge.
    ///
    /// Undirected graphs get both arcs (`size += 2`), directed graphs one.
    /// No guard against self-loops or duplicates; use
    /// [`from_edges`](Self::from_edges) for checked construction.
    ///
    /// # Panics
    /// Panics if either id is outside `0..capacity()`.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.adjacency[u].push(v);
        self.size += 1;
        if !self.directed {
            self.adjacency[v].push(u);
            self.size += 1;
        }
    }

    /// Removes `v` and every arc touching it.
    ///
    /// A no-op for vertices that are already gone.
    pub fn delete_vertex(&mut self, v: usize) {
        if !self.vertex_exists(v) {
            return;
        }

        let outgoing = std::mem::take(&mut self.adjacency[v]);
        if self.directed {
            for u in 0..self.adjacency.len() {
                if !self.alive[u] || u == v {
                    continue;
                }
                let before = self.adjacency[u].len();
                self.adjacency[u].retain(|&w| w != v);
                self.size -= before - self.adjacency[u].len();
            }
        } else {
            for &n in &outgoing {
                if let Some(pos) = self.adjacency[n].iter().position(|&w| w == v) {
                    self.adjacency[n].swap_remove(pos);
                    self.size -= 1;
                }
            }
        }

        self.size -= outgoing.len();
        self.alive[v] = false;
        self.order -= 1;
    }

    /// Removes `v` together with every vertex currently adjacent to it.
    ///
    /// The removal set is fixed before the first deletion, so overlapping
    /// neighborhoods never delete a vertex twice.
    pub fn delete_closed_neighborhood(&mut self, v: usize) {
        if !self.vertex_exists(v) {
            return;
        }
        let mut targets = Vec::with_capacity(1 + self.adjacency[v].len());
        targets.push(v);
        targets.extend_from_slice(&self.adjacency[v]);

        for t in targets {
            self.delete_vertex(t);
        }
    }

    /// Live edges; undirected edges are reported once as `(min, max)`.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.size);
        for u in self.vertices() {
            for &v in &self.adjacency[u] {
                if self.directed || u < v {
                    out.push((u, v));
                }
            }
        }
        out
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.vertices() {
            write!(f, "{v} ---->")?;
            for n in &self.adjacency[v] {
                write!(f, " {n}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
