//! Lazy enumeration of induced subgraphs
//!
//! Subsets are visited in bitmask order: bit `i` stands for the `i`-th vertex,
//! so the empty subgraph comes first and the whole graph last.

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::graph::model::Graph;
use crate::io::error::Result;

/// Vertex subset and the edges it induces
pub type InducedSubgraph<V> = (Vec<V>, Vec<(V, V)>);

/// Iterator over all `2^n` induced subgraphs of a graph
#[derive(Clone, Debug)]
pub struct InducedSubgraphs<V> {
    vertices: Vec<V>,
    edges: Vec<(usize, usize)>,
    mask: u64,
    end: u64,
}

impl<V> InducedSubgraphs<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Enumerate the induced subgraphs of `graph`
    ///
    /// # Errors
    ///
    /// Returns an error for graphs above `MAX_ENUMERATION_VERTICES`
    pub fn new(graph: &Graph<V>) -> Result<Self> {
        graph.ensure_enumerable()?;
        Ok(Self {
            vertices: graph.vertices().to_vec(),
            edges: graph.edge_indices().to_vec(),
            mask: 0,
            end: 1_u64 << graph.order(),
        })
    }

    fn member(&self, index: usize) -> bool {
        (self.mask >> index) & 1 == 1
    }

    fn current(&self) -> InducedSubgraph<V> {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .filter(|&(index, _)| self.member(index))
            .map(|(_, vertex)| vertex.clone())
            .collect();

        let edges = self
            .edges
            .iter()
            .filter(|&&(a, b)| self.member(a) && self.member(b))
            .filter_map(|&(a, b)| {
                self.vertices
                    .get(a)
                    .cloned()
                    .zip(self.vertices.get(b).cloned())
            })
            .collect();

        (vertices, edges)
    }
}

impl<V> Iterator for InducedSubgraphs<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    type Item = InducedSubgraph<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask >= self.end {
            return None;
        }
        let subgraph = self.current();
        self.mask += 1;
        Some(subgraph)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.mask) as usize;
        (remaining, Some(remaining))
    }
}

impl<V> ExactSizeIterator for InducedSubgraphs<V> where V: Clone + Eq + Hash + fmt::Debug {}

impl<V> FusedIterator for InducedSubgraphs<V> where V: Clone + Eq + Hash + fmt::Debug {}

/// Every induced subgraph of the graph on `vertices` with `edges`
///
/// # Errors
///
/// Returns an error if an edge names an unknown vertex or is a self loop, or
/// if the graph is above `MAX_ENUMERATION_VERTICES`
pub fn induced_subgraphs<V>(vertices: &[V], edges: &[(V, V)]) -> Result<InducedSubgraphs<V>>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    let graph = Graph::new(vertices.iter().cloned(), edges.iter().cloned())?;
    InducedSubgraphs::new(&graph)
}
