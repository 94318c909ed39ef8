use crate::spatial::grid::AugmentedGrid;
use crate::spatial::tiles::{Color, Direction, Tile, TileSet};

/// Constraint one side of a cell places on the tile that goes there
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement<'a> {
    /// Nothing is known yet on this side
    Free,
    /// The tile must show exactly this color
    Exactly(&'a Color),
    /// The neighbor is a wildcard, no tile can match
    Blocked,
}

impl Requirement<'_> {
    /// Test whether a side color satisfies the requirement
    pub fn admits(&self, color: &Color) -> bool {
        match self {
            Self::Free => true,
            Self::Exactly(required) => *required == color,
            Self::Blocked => false,
        }
    }
}

/// Collect the constraints on the cell at `(column, row)` for row-major filling
///
/// The left and upper neighbors are always settled (a placed tile or a ring
/// sentinel). The right side only matters in the last column, where it meets
/// the right boundary, and the bottom side only in the last row.
pub fn requirements<'a>(
    grid: &'a AugmentedGrid,
    catalog: &'a TileSet,
    column: usize,
    row: usize,
) -> [Requirement<'a>; 4] {
    let settled = |direction: Direction| {
        grid.neighbor_facing(column, row, direction, catalog)
            .map_or(Requirement::Blocked, Requirement::Exactly)
    };

    let right = if column + 1 == grid.width() {
        settled(Direction::Right)
    } else {
        Requirement::Free
    };
    let down = if row + 1 == grid.height() {
        settled(Direction::Down)
    } else {
        Requirement::Free
    };

    [settled(Direction::Left), settled(Direction::Up), right, down]
}

/// Test a tile against the constraints of a cell
pub fn fits(tile: &Tile, requirements: &[Requirement<'_>; 4]) -> bool {
    Direction::ALL
        .iter()
        .zip(requirements.iter())
        .all(|(&direction, requirement)| requirement.admits(tile.color(direction)))
}
