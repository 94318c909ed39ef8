/// Depth-first tiling search at a fixed wall height
pub mod backtrack;
/// Fixed-size bitset for catalog and vertex index sets
pub mod bitset;
/// Caching of candidate tile sets per cell neighborhood
pub mod cache;
/// Solver entry points and height iteration
pub mod executor;
/// Edge-matching constraints for a single cell
pub mod feasibility;

pub use executor::{TileSolver, find_tiling};
