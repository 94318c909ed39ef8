//! Solver limits and runtime configuration defaults

/// Default upper bound on wall height when a problem does not specify one
pub const DEFAULT_MAX_HEIGHT: usize = 4;

// Keeps the augmented grid and candidate cache bounded
/// Maximum supported wall width
pub const MAX_WALL_WIDTH: usize = 1_024;

// 2^24 subsets is the most the brute-force graph helpers will walk
/// Maximum vertex count for exponential graph enumerations
pub const MAX_ENUMERATION_VERTICES: usize = 24;

/// Maximum vertex count for the perfection check, which colors every
/// induced subgraph exactly
pub const MAX_PERFECTION_VERTICES: usize = 12;

/// Largest sorting network that can be verified by the 0-1 principle
pub const MAX_NETWORK_WIRES: usize = 24;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Fixed seed for reproducible random graphs
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to exported wall images
pub const OUTPUT_SUFFIX: &str = "_tiling";
/// Side length of one rendered cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 48;
/// Smallest cell size that still leaves room for the four triangles
pub const MIN_CELL_SIZE: u32 = 8;
/// Largest cell size accepted for rendering
pub const MAX_CELL_SIZE: u32 = 512;
/// Extension of problem files picked up from a directory
pub const PROBLEM_EXTENSION: &str = "json";
