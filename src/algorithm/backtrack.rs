//! Depth-first search over the cells of a wall of fixed height
//!
//! Cells are filled in row-major order. Each stack frame holds the candidate
//! tiles of one cell and a cursor into them; advancing the cursor replaces the
//! tile in the cell, exhausting it clears the cell and pops the frame. The
//! stack is explicit, so the wall size is bounded by memory rather than by the
//! call stack.

use ndarray::Array2;

use crate::algorithm::bitset::Bitset;
use crate::algorithm::cache::CandidateCache;
use crate::algorithm::feasibility::{fits, requirements};
use crate::spatial::grid::{AugmentedGrid, WallSpec};
use crate::spatial::tiles::TileSet;

/// Work done by one fixed-height search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tiles placed, counting every trial
    pub nodes: usize,
    /// Cells whose candidates ran out
    pub backtracks: usize,
}

struct Frame {
    candidates: Bitset,
    cursor: usize,
}

/// Search for a tiling of exactly `height` rows
///
/// Returns the catalog indices of the first tiling in row-major, catalog-order
/// depth-first order, or `None` when the height admits no tiling.
pub fn search_height(
    catalog: &TileSet,
    spec: &WallSpec,
    height: usize,
    cache: &mut CandidateCache,
) -> (Option<Array2<usize>>, SearchStats) {
    let mut stats = SearchStats::default();
    let width = spec.width();
    let cells = width * height;
    if cells == 0 {
        return (None, stats);
    }

    let mut grid = AugmentedGrid::new(spec, height);
    let mut stack: Vec<Frame> = Vec::with_capacity(cells);
    stack.push(Frame {
        candidates: cache.candidates(&requirements(&grid, catalog, 0, 0)),
        cursor: 0,
    });

    loop {
        let depth = stack.len().saturating_sub(1);
        let (column, row) = (depth % width, depth / width);

        let Some(frame) = stack.last_mut() else {
            return (None, stats);
        };

        if let Some(index) = frame.candidates.next_from(frame.cursor) {
            debug_assert!(
                catalog
                    .get(index)
                    .is_some_and(|tile| fits(tile, &requirements(&grid, catalog, column, row))),
                "cached candidate {index} does not fit cell ({column}, {row})"
            );
            frame.cursor = index + 1;
            grid.place(column, row, index);
            stats.nodes += 1;

            let next = depth + 1;
            if next == cells {
                return (grid.placed_indices(), stats);
            }

            let candidates =
                cache.candidates(&requirements(&grid, catalog, next % width, next / width));
            stack.push(Frame {
                candidates,
                cursor: 0,
            });
        } else {
            grid.clear(column, row);
            stack.pop();
            stats.backtracks += 1;

            if stack.is_empty() {
                return (None, stats);
            }
        }
    }
}
