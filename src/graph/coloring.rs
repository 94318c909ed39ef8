//! Proper vertex colorings
//!
//! Colors are small integers starting at 0. The greedy coloring is fast and
//! depends on vertex order; the optimal coloring is exact and exponential.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::algorithm::bitset::Bitset;
use crate::graph::model::Graph;
use crate::io::error::Result;

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Greedy proper coloring, one color per vertex index
    ///
    /// Vertices are visited in graph order and take the smallest color not
    /// used by an already colored neighbor.
    pub fn greedy_colors(&self) -> Vec<usize> {
        let mut colors: Vec<Option<usize>> = vec![None; self.order()];

        for vertex in 0..self.order() {
            let mut taken = Bitset::new(self.order() + 1);
            if let Some(neighbors) = self.neighbors(vertex) {
                for neighbor in neighbors.iter() {
                    if let Some(color) = colors.get(neighbor).copied().flatten() {
                        taken.insert(color);
                    }
                }
            }

            let color = (0..=self.order())
                .find(|&candidate| !taken.contains(candidate))
                .unwrap_or(0);
            if let Some(slot) = colors.get_mut(vertex) {
                *slot = Some(color);
            }
        }

        colors.into_iter().map(|color| color.unwrap_or(0)).collect()
    }

    /// Proper coloring with the fewest possible colors
    ///
    /// # Errors
    ///
    /// Returns an error for graphs above `MAX_ENUMERATION_VERTICES`
    pub fn optimal_colors(&self) -> Result<Vec<usize>> {
        self.ensure_enumerable()?;
        if self.order() == 0 {
            return Ok(Vec::new());
        }

        let mut colors = vec![0; self.order()];
        for palette in 1..=self.order() {
            if self.color_with(palette, 0, &mut colors) {
                return Ok(colors);
            }
        }

        // A graph on n vertices is always n-colorable
        Ok(self.greedy_colors())
    }

    /// Smallest number of colors in a proper coloring
    ///
    /// # Errors
    ///
    /// Returns an error for graphs above `MAX_ENUMERATION_VERTICES`
    pub fn chromatic_number(&self) -> Result<usize> {
        Ok(self
            .optimal_colors()?
            .iter()
            .max()
            .map_or(0, |&highest| highest + 1))
    }

    // Assigns colors to vertices `vertex..` in order. A vertex may open at
    // most one new color, which removes palette permutations from the search.
    fn color_with(&self, palette: usize, vertex: usize, colors: &mut [usize]) -> bool {
        if vertex == self.order() {
            return true;
        }

        let opened = colors
            .get(..vertex)
            .and_then(|assigned| assigned.iter().max())
            .map_or(0, |&highest| highest + 1);

        for color in 0..palette.min(opened + 1) {
            let clashes = (0..vertex).any(|earlier| {
                self.adjacent(vertex, earlier) && colors.get(earlier) == Some(&color)
            });
            if clashes {
                continue;
            }

            if let Some(slot) = colors.get_mut(vertex) {
                *slot = color;
            }
            if self.color_with(palette, vertex + 1, colors) {
                return true;
            }
        }

        false
    }
}

/// Greedy proper coloring of a graph given as vertices and edges
///
/// Deterministic for a given vertex order.
///
/// # Errors
///
/// Returns an error if an edge names an unknown vertex or is a self loop
pub fn greedy_coloring<V>(vertices: &[V], edges: &[(V, V)]) -> Result<HashMap<V, usize>>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    let graph = Graph::new(vertices.iter().cloned(), edges.iter().cloned())?;
    Ok(graph
        .vertices()
        .iter()
        .cloned()
        .zip(graph.greedy_colors())
        .collect())
}
