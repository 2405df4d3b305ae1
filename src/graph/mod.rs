//! Graph substrate for the search engines.
//!
//! [`Graph`] holds adjacency lists indexed by stable vertex ids and an
//! alive flag per id. The engines never mutate the caller's graph: every
//! phase that deletes vertices clones a private working copy first.
//!
//! The key primitive is [`Graph::delete_closed_neighborhood`]: labeling a
//! vertex 3 dominates it and all its neighbors, so construction phases
//! remove that whole closed neighborhood from the working copy.

mod io;
mod types;

pub use types::Graph;
