//! Brute-force perfection check
//!
//! A graph is perfect when every induced subgraph has a clique number equal to
//! its chromatic number. Both sides are computed exactly for every subset, so
//! this is only usable on small graphs.

use std::fmt;
use std::hash::Hash;

use crate::algorithm::bitset::Bitset;
use crate::graph::model::Graph;
use crate::io::configuration::MAX_PERFECTION_VERTICES;
use crate::io::error::Result;

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// First induced subgraph, in bitmask order, whose clique number differs
    /// from its chromatic number
    ///
    /// Returns the vertices of that subgraph, or `None` for a perfect graph.
    ///
    /// # Errors
    ///
    /// Returns an error for graphs above `MAX_PERFECTION_VERTICES`
    pub fn imperfect_witness(&self) -> Result<Option<Vec<V>>> {
        self.ensure_at_most(MAX_PERFECTION_VERTICES)?;

        for mask in 1_u64..(1_u64 << self.order()) {
            let subset = Bitset::from_indices(
                (0..self.order()).filter(|&index| (mask >> index) & 1 == 1),
                self.order(),
            );
            let induced = self.induced(&subset);
            if induced.clique_number()? != induced.chromatic_number()? {
                return Ok(Some(induced.vertices().to_vec()));
            }
        }

        Ok(None)
    }

    /// Test whether every induced subgraph satisfies ω = χ
    ///
    /// # Errors
    ///
    /// Returns an error for graphs above `MAX_PERFECTION_VERTICES`
    pub fn is_perfect(&self) -> Result<bool> {
        Ok(self.imperfect_witness()?.is_none())
    }
}
