//! Tiles, walls and the grids they are solved on
//!
//! This module contains:
//! - Edge-colored tiles and tile catalogs
//! - Wall boundary descriptions
//! - The sentinel-ringed search grid and solved walls

/// Wall descriptions, search grids and solved walls
pub mod grid;
/// Tile, color and catalog types
pub mod tiles;

pub use grid::{Wall, WallSpec};
pub use tiles::{Color, Direction, Tile, TileSet};
