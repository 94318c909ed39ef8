//! Maximum cliques and independent sets by exhaustive search
//!
//! Candidates are extended in ascending vertex order, so among all maximum
//! cliques the one that comes first lexicographically by vertex position is
//! returned.

use std::fmt;
use std::hash::Hash;

use crate::algorithm::bitset::Bitset;
use crate::graph::model::Graph;
use crate::io::error::Result;

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Vertex indices of a maximum clique, ascending
    ///
    /// # Errors
    ///
    /// Returns an error for graphs above `MAX_ENUMERATION_VERTICES`
    pub fn maximum_clique_indices(&self) -> Result<Vec<usize>> {
        self.ensure_enumerable()?;

        let mut best = Vec::new();
        let mut current = Vec::new();
        self.extend_clique(&mut current, &Bitset::all(self.order()), &mut best);
        Ok(best)
    }

    /// Size of a maximum clique
    ///
    /// # Errors
    ///
    /// Returns an error for graphs above `MAX_ENUMERATION_VERTICES`
    pub fn clique_number(&self) -> Result<usize> {
        Ok(self.maximum_clique_indices()?.len())
    }

    /// Vertex indices of a maximum independent set, ascending
    ///
    /// # Errors
    ///
    /// Returns an error for graphs above `MAX_ENUMERATION_VERTICES`
    pub fn maximum_independent_set_indices(&self) -> Result<Vec<usize>> {
        self.complement().maximum_clique_indices()
    }

    // `candidates` holds the vertices after the last clique member that are
    // adjacent to every member. Branches that cannot strictly beat `best`
    // are cut, which keeps the first maximum clique found.
    fn extend_clique(&self, current: &mut Vec<usize>, candidates: &Bitset, best: &mut Vec<usize>) {
        if current.len() > best.len() {
            best.clone_from(current);
        }

        for vertex in candidates.iter() {
            let remaining = candidates.iter().filter(|&other| other >= vertex).count();
            if current.len() + remaining <= best.len() {
                return;
            }

            let mut narrowed = Bitset::new(self.order());
            if let Some(neighbors) = self.neighbors(vertex) {
                for other in candidates.iter().filter(|&other| other > vertex) {
                    if neighbors.contains(other) {
                        narrowed.insert(other);
                    }
                }
            }

            current.push(vertex);
            self.extend_clique(current, &narrowed, best);
            current.pop();
        }
    }
}

/// Maximum clique of the graph on `vertices` with `edges`
///
/// Ties between maximum cliques are broken by vertex order.
///
/// # Errors
///
/// Returns an error if an edge names an unknown vertex or is a self loop, or
/// if the graph is above `MAX_ENUMERATION_VERTICES`
pub fn maximum_clique<V>(vertices: &[V], edges: &[(V, V)]) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    let graph = Graph::new(vertices.iter().cloned(), edges.iter().cloned())?;
    Ok(graph.labels(&graph.maximum_clique_indices()?))
}

/// Maximum independent set of the graph spanned by `edges`
///
/// Vertices are ordered by first appearance in the edge list, so isolated
/// vertices cannot be expressed here.
///
/// # Errors
///
/// Returns an error if an edge is a self loop or the graph is above
/// `MAX_ENUMERATION_VERTICES`
pub fn independent_set<V>(edges: &[(V, V)]) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    let graph = Graph::from_edges(edges.iter().cloned())?;
    Ok(graph.labels(&graph.maximum_independent_set_indices()?))
}
