//! Genetic Algorithm for Double Roman Domination.
//!
//! Individuals are [`Labeling`](crate::labeling::Labeling)s with one gene
//! per vertex. Every offspring is repaired before insertion, so the whole
//! population stays feasible and the objective is simply the total weight
//! (lower is better).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, rates)
//! - [`GeneticAlgorithm`]: Executes the evolutionary loop
//! - [`GaResult`]: Best labeling and weight history
//! - [`CrossoverStrategy`]: Pluggable recombination
//!
//! # Submodules
//!
//! - [`operators`]: Window swap and splice crossover, label mutation
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Beeler, Haynes & Hedetniemi (2016), "Double Roman domination",
//!   *Discrete Applied Mathematics* 211, 23-29

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::{OnePointSplice, SegmentSwap};
pub use runner::{GaResult, GeneticAlgorithm};
pub use selection::Selection;
pub use types::CrossoverStrategy;
