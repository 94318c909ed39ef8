//! Seeded random graph generators
//!
//! Vertices are labelled `0..n`. The same seed always gives the same graph.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::graph::model::Graph;
use crate::io::error::{Result, invalid_parameter};

/// Uniform random graph with `vertices` vertices and exactly `edges` edges
///
/// # Errors
///
/// Returns an error if `edges` exceeds the number of vertex pairs
pub fn gnm_random_graph(vertices: usize, edges: usize, seed: u64) -> Result<Graph<usize>> {
    let pairs: usize = vertices * vertices.saturating_sub(1) / 2;
    if edges > pairs {
        return Err(invalid_parameter(
            "edges",
            &edges,
            &format!("a graph on {vertices} vertices has only {pairs} vertex pairs"),
        ));
    }

    let mut candidates: Vec<(usize, usize)> = (0..vertices)
        .flat_map(|a| ((a + 1)..vertices).map(move |b| (a, b)))
        .collect();
    let mut rng = StdRng::seed_from_u64(seed);
    candidates.shuffle(&mut rng);
    candidates.truncate(edges);
    candidates.sort_unstable();

    Graph::new(0..vertices, candidates)
}

/// Random bipartite graph with parts `0..left` and `left..left + right`
///
/// Every pair across the parts is joined independently with probability
/// `probability`.
///
/// # Errors
///
/// Returns an error if `probability` is not within `0.0..=1.0`
pub fn random_bipartite_graph(
    left: usize,
    right: usize,
    probability: f64,
    seed: u64,
) -> Result<Graph<usize>> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(invalid_parameter(
            "probability",
            &probability,
            &"must be between 0 and 1",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for a in 0..left {
        for b in left..(left + right) {
            if rng.random_bool(probability) {
                edges.push((a, b));
            }
        }
    }

    Graph::new(0..(left + right), edges)
}
