//! Small-graph helpers
//!
//! This module contains:
//! - An undirected graph model over arbitrary vertex labels
//! - Greedy and exact vertex coloring
//! - Maximum cliques and independent sets
//! - Induced subgraph enumeration and the perfection check
//! - Seeded random graph generators
//!
//! Everything exponential refuses graphs above the configured vertex limits
//! instead of running indefinitely.

/// Maximum cliques and independent sets
pub mod clique;
/// Greedy and optimal vertex colorings
pub mod coloring;
/// Graph type with adjacency bitsets
pub mod model;
/// Perfect graph check
pub mod perfect;
/// Seeded random graph generators
pub mod random;
/// Lazy induced subgraph enumeration
pub mod subgraphs;

pub use clique::{independent_set, maximum_clique};
pub use coloring::greedy_coloring;
pub use model::Graph;
pub use random::{gnm_random_graph, random_bipartite_graph};
pub use subgraphs::{InducedSubgraphs, induced_subgraphs};
