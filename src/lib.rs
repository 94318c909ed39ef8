//! Wang tile walls and small combinatorial searches
//!
//! The core of the crate decides whether a wall with fixed side and bottom
//! colors and a given top row can be tiled from a catalog of edge-colored
//! tiles, searching wall heights from one upward. Around it sit the graph,
//! Catalan, sorting-network and state-space helpers the tiling material is
//! taught alongside.

#![forbid(unsafe_code)]

/// Tiling search: candidate sets, caching and the backtracking solver
pub mod algorithm;
/// Catalan tree shapes and sorting networks
pub mod combinatorics;
/// Graph colorings, cliques, subgraphs and random graphs
pub mod graph;
/// Problem files, presets, rendering, errors and the command line
pub mod io;
/// Breadth-first search, the maze chase and resource optimization
pub mod search;
/// Tiles, catalogs, wall descriptions and solved walls
pub mod spatial;

pub use algorithm::{TileSolver, find_tiling};
pub use io::error::{Result, TilingError};
pub use spatial::{Color, Direction, Tile, TileSet, Wall, WallSpec};
