//! Height iteration around the fixed-height search
//!
//! Walls are tried at heights `1, 2, …, max_height`; the first height that
//! admits a tiling wins. Rejection is an ordinary outcome reported as
//! `Ok(None)`, while malformed input fails before any search runs.

use tracing::{debug, info};

use crate::algorithm::backtrack::{SearchStats, search_height};
use crate::algorithm::cache::CandidateCache;
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::grid::{Wall, WallSpec};
use crate::spatial::tiles::{Color, Direction, TileSet};

/// Report on one attempted height, handed to solve observers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeightAttempt {
    /// Height that was searched
    pub height: usize,
    /// Upper bound of the whole solve
    pub max_height: usize,
    /// Work done at this height
    pub stats: SearchStats,
    /// Whether a tiling was found at this height
    pub accepted: bool,
}

/// Wang tile solver bound to one catalog
///
/// The catalog order is the trial order, so solving the same wall twice
/// yields the same tiling.
#[derive(Clone, Debug)]
pub struct TileSolver {
    catalog: TileSet,
}

impl TileSolver {
    /// Create a solver for a catalog
    pub const fn new(catalog: TileSet) -> Self {
        Self { catalog }
    }

    /// The catalog tiles are drawn from
    pub const fn catalog(&self) -> &TileSet {
        &self.catalog
    }

    /// Find the lowest wall up to `max_height` rows that the catalog can tile
    ///
    /// # Errors
    ///
    /// Returns an error if `max_height` is zero or the catalog is empty
    pub fn solve(&self, spec: &WallSpec, max_height: usize) -> Result<Option<Wall>> {
        self.solve_observed(spec, max_height, |_| {})
    }

    /// Same as [`TileSolver::solve`], reporting every attempted height
    ///
    /// # Errors
    ///
    /// Returns an error if `max_height` is zero or the catalog is empty
    #[tracing::instrument(skip_all, fields(width = spec.width(), max_height = max_height))]
    pub fn solve_observed<F>(
        &self,
        spec: &WallSpec,
        max_height: usize,
        mut observer: F,
    ) -> Result<Option<Wall>>
    where
        F: FnMut(&HeightAttempt),
    {
        if self.catalog.is_empty() {
            return Err(TilingError::EmptyCatalog);
        }
        if max_height == 0 {
            return Err(invalid_parameter(
                "max_height",
                &max_height,
                &"must be at least 1",
            ));
        }

        if let Some((direction, color)) = self.unmatched_boundary(spec) {
            info!(%direction, %color, "no tile can meet the boundary, rejecting");
            return Ok(None);
        }

        let mut cache = CandidateCache::new(&self.catalog);

        for height in 1..=max_height {
            let (indices, stats) = search_height(&self.catalog, spec, height, &mut cache);
            let accepted = indices.is_some();

            debug!(
                height,
                nodes = stats.nodes,
                backtracks = stats.backtracks,
                cache_hits = cache.stats.hits,
                cache_misses = cache.stats.misses,
                accepted,
                "searched height"
            );
            observer(&HeightAttempt {
                height,
                max_height,
                stats,
                accepted,
            });

            if let Some(indices) = indices {
                let wall = Wall::from_indices(spec, &self.catalog, indices)?;
                info!(height, "tiling found");
                return Ok(Some(wall));
            }
        }

        info!("no tiling up to the maximum height, rejecting");
        Ok(None)
    }

    // Boundary colors that no tile shows on the matching side make every
    // height fail, whatever the search would try
    fn unmatched_boundary<'a>(&self, spec: &'a WallSpec) -> Option<(Direction, &'a Color)> {
        let sides = [Direction::Left, Direction::Right, Direction::Down];
        let fixed = sides.into_iter().filter_map(|direction| {
            spec.boundary(direction).map(|color| (direction, color))
        });
        let input = spec.input().iter().map(|color| (Direction::Up, color));

        input
            .chain(fixed)
            .find(|(direction, color)| !self.catalog.offers(*direction, color))
    }
}

/// Find the lowest tiling of `spec` from `catalog`, up to `max_height` rows
///
/// Returns `Ok(None)` when no height up to `max_height` admits a tiling.
///
/// # Errors
///
/// Returns an error if `max_height` is zero
pub fn find_tiling(catalog: &TileSet, spec: &WallSpec, max_height: usize) -> Result<Option<Wall>> {
    TileSolver::new(catalog.clone()).solve(spec, max_height)
}
