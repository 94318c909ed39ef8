//! Small undirected graphs with adjacency bitsets
//!
//! Vertices keep the order they were given in; every helper that has to break
//! ties does so by that order, which makes their results deterministic.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::algorithm::bitset::Bitset;
use crate::io::configuration::MAX_ENUMERATION_VERTICES;
use crate::io::error::{Result, TilingError, invalid_parameter};

/// Simple undirected graph over caller-supplied vertex labels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<V> {
    vertices: Vec<V>,
    adjacency: Vec<Bitset>,
    edges: Vec<(usize, usize)>,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Build a graph from vertices in order and undirected edges
    ///
    /// Repeated vertices keep their first position and repeated edges (in
    /// either orientation) collapse into one.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge names a vertex that is not listed or
    /// joins a vertex to itself
    pub fn new(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, V)>,
    ) -> Result<Self> {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();
        for vertex in vertices {
            if !index.contains_key(&vertex) {
                index.insert(vertex.clone(), ordered.len());
                ordered.push(vertex);
            }
        }

        let lookup = |vertex: &V| {
            index
                .get(vertex)
                .copied()
                .ok_or_else(|| TilingError::UnknownVertex {
                    vertex: format!("{vertex:?}"),
                })
        };

        let mut graph = Self::empty(ordered);
        for (u, v) in edges {
            let (a, b) = (lookup(&u)?, lookup(&v)?);
            if a == b {
                return Err(invalid_parameter(
                    "edges",
                    &format!("({u:?}, {v:?})"),
                    &"self loops are not allowed",
                ));
            }
            graph.connect(a, b);
        }

        Ok(graph)
    }

    /// Build a graph spanned by its edges
    ///
    /// Vertices are ordered by first appearance in the edge list.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge joins a vertex to itself
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Result<Self> {
        let edges: Vec<(V, V)> = edges.into_iter().collect();
        let vertices: Vec<V> = edges
            .iter()
            .flat_map(|(u, v)| [u.clone(), v.clone()])
            .collect();
        Self::new(vertices, edges)
    }

    /// Number of vertices
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in graph order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Vertex label at an index
    pub fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    /// Position of a vertex label
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|candidate| candidate == vertex)
    }

    /// Edges as index pairs, in insertion order
    pub fn edge_indices(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Edges as label pairs, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.edges
            .iter()
            .filter_map(|&(a, b)| self.vertex(a).zip(self.vertex(b)))
    }

    /// Test adjacency of two vertex indices
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency.get(a).is_some_and(|row| row.contains(b))
    }

    /// Neighbors of a vertex index
    pub fn neighbors(&self, index: usize) -> Option<&Bitset> {
        self.adjacency.get(index)
    }

    /// Graph on the same vertices with exactly the missing edges
    #[must_use]
    pub fn complement(&self) -> Self {
        let mut complement = Self::empty(self.vertices.clone());
        for a in 0..self.order() {
            for b in (a + 1)..self.order() {
                if !self.adjacent(a, b) {
                    complement.connect(a, b);
                }
            }
        }
        complement
    }

    /// Subgraph induced by the members of `subset`, keeping vertex order
    #[must_use]
    pub fn induced(&self, subset: &Bitset) -> Self {
        let members: Vec<usize> = subset.iter().filter(|&i| i < self.order()).collect();
        let mut position = vec![None; self.order()];
        for (new_index, &old_index) in members.iter().enumerate() {
            if let Some(slot) = position.get_mut(old_index) {
                *slot = Some(new_index);
            }
        }

        let vertices = members
            .iter()
            .filter_map(|&i| self.vertex(i).cloned())
            .collect();
        let mut induced = Self::empty(vertices);
        for &(a, b) in &self.edges {
            let mapped = position.get(a).copied().flatten().zip(position.get(b).copied().flatten());
            if let Some((x, y)) = mapped {
                induced.connect(x, y);
            }
        }
        induced
    }

    /// Refuse graphs too large for an exponential enumeration
    ///
    /// # Errors
    ///
    /// Returns `TilingError::GraphTooLarge` above `limit` vertices
    pub fn ensure_at_most(&self, limit: usize) -> Result<()> {
        if self.order() > limit {
            return Err(TilingError::GraphTooLarge {
                vertices: self.order(),
                limit,
            });
        }
        Ok(())
    }

    /// Refuse graphs above `MAX_ENUMERATION_VERTICES`
    ///
    /// # Errors
    ///
    /// Returns `TilingError::GraphTooLarge` for larger graphs
    pub fn ensure_enumerable(&self) -> Result<()> {
        self.ensure_at_most(MAX_ENUMERATION_VERTICES)
    }

    /// Map vertex indices back to labels
    pub fn labels(&self, indices: &[usize]) -> Vec<V> {
        indices
            .iter()
            .filter_map(|&i| self.vertex(i).cloned())
            .collect()
    }

    fn empty(vertices: Vec<V>) -> Self {
        let order = vertices.len();
        Self {
            vertices,
            adjacency: vec![Bitset::new(order); order],
            edges: Vec::new(),
        }
    }

    fn connect(&mut self, a: usize, b: usize) {
        if a == b || self.adjacent(a, b) {
            return;
        }
        if let Some(row) = self.adjacency.get_mut(a) {
            row.insert(b);
        }
        if let Some(row) = self.adjacency.get_mut(b) {
            row.insert(a);
        }
        self.edges.push((a, b));
    }
}
