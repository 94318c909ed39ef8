//! Enumerative combinatorics helpers
//!
//! This module contains:
//! - Binary tree shapes and Catalan numbers
//! - Comparator sorting networks with the 0-1 check

/// Binary tree shapes counted by the Catalan numbers
pub mod catalan;
/// Comparator networks and optimal networks for few wires
pub mod sorting;

pub use catalan::{Shape, binary_trees, catalan_number};
pub use sorting::SortingNetwork;
