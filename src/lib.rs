//! Heuristic Double Roman Domination.
//!
//! A Double Roman dominating labeling assigns each vertex a label in
//! `{0, 2, 3}` so that every vertex labeled 0 has a neighbor labeled 3.
//! This crate searches for light labelings with two independent engines:
//!
//! - **Genetic Algorithm (GA)**: Population of labelings evolved by
//!   selection, window-swap crossover, mutation and feasibility repair,
//!   optionally seeded by a construction heuristic.
//! - **Ant Colony Optimization (ACO)**: Ants cover closed neighborhoods
//!   guided by per-vertex pheromone, then extend, reduce and improve their
//!   labelings with Reduced Variable Neighborhood Search (RVNS).
//!
//! Both engines borrow a [`graph::Graph`] read-only and mutate private
//! working copies. [`drd::DoubleRomanDomination`] runs them side by side.
//!
//! # Architecture
//!
//! `graph` and `labeling` carry the problem; `heuristics`, `ga` and `aco`
//! search it; `drd` coordinates. Every engine owns one seedable
//! [`random::DrdRng`], so runs with a fixed seed are reproducible.

pub mod aco;
pub mod drd;
pub mod error;
pub mod ga;
pub mod graph;
pub mod heuristics;
pub mod labeling;
pub mod random;

pub use error::{DrdError, Result};
