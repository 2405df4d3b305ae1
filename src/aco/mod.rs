//! Ant Colony Optimization with RVNS for Double Roman Domination.
//!
//! Ants build labelings by covering closed neighborhoods of vertices
//! chosen with a `degree × pheromone` bias. Each ant's labeling is then
//! extended (a few extra 3s), reduced (greedy label lowering) and
//! improved by Reduced Variable Neighborhood Search. Pheromones follow
//! the 3-labeled vertices of the iteration best and the best so far.
//!
//! # Key Types
//!
//! - [`AcoConfig`] / [`RvnsConfig`]: Colony and improvement parameters
//! - [`AntColony`]: The engine; phases are public for fine-grained use
//! - [`PheromoneTable`]: Per-vertex pheromone with convergence detection
//! - [`AcoResult`]: Best labeling and weight history
//!
//! # References
//!
//! - Dorigo, M. & Stützle, T. (2004), *Ant Colony Optimization*, MIT Press
//! - Blum, C. & Dorigo, M. (2004), "The hyper-cube framework for ant colony
//!   optimization", *IEEE Trans. SMC Part B* 34(2), 1161-1172

mod config;
mod phases;
mod pheromone;
mod runner;
mod rvns;

pub use config::{AcoConfig, RvnsConfig};
pub use pheromone::PheromoneTable;
pub use runner::{AcoResult, AntColony};
