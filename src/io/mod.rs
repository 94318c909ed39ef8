//! Problem input, rendering and the command line
//!
//! This module contains:
//! - Error types and crate-wide limits
//! - JSON problem files and built-in presets
//! - PNG rendering of solved walls
//! - Progress display and the CLI driver

/// Command-line parsing and batch solving
pub mod cli;
/// Solver limits and output defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of walls
pub mod image;
/// Built-in example problems
pub mod presets;
/// JSON problem files
pub mod problem;
/// Progress bars for batches of problems
pub mod progress;
