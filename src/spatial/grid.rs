//! Wall descriptions, the sentinel-ringed search grid, and solved walls
//!
//! The search grid is the wall padded by one ring of synthetic single-sided
//! tiles. The ring carries the input row on top and the fixed boundary colors
//! on the other three sides, so checking a cell against the wall boundary is
//! the same operation as checking it against a neighboring tile.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::MAX_WALL_WIDTH;
use crate::io::error::{Result, invalid_wall};
use crate::spatial::tiles::{Color, Direction, Tile, TileSet};

/// Boundary conditions of a wall
///
/// The width is the length of the input sequence written along the top edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallSpec {
    left: Color,
    right: Color,
    down: Color,
    input: Vec<Color>,
}

impl WallSpec {
    /// Create a wall description from its boundary colors and top input
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or wider than `MAX_WALL_WIDTH`
    pub fn new(
        left: impl Into<Color>,
        right: impl Into<Color>,
        down: impl Into<Color>,
        input: Vec<Color>,
    ) -> Result<Self> {
        if input.is_empty() {
            return Err(invalid_wall(&"input sequence must contain at least one color"));
        }
        if input.len() > MAX_WALL_WIDTH {
            return Err(invalid_wall(&format!(
                "width {} exceeds the supported maximum of {MAX_WALL_WIDTH}",
                input.len()
            )));
        }

        Ok(Self {
            left: left.into(),
            right: right.into(),
            down: down.into(),
            input,
        })
    }

    /// Create a wall description with an explicitly stated width
    ///
    /// # Errors
    ///
    /// Returns an error if `width` differs from the input length, or for any
    /// reason `WallSpec::new` rejects the input
    pub fn with_width(
        width: usize,
        left: impl Into<Color>,
        right: impl Into<Color>,
        down: impl Into<Color>,
        input: Vec<Color>,
    ) -> Result<Self> {
        if width != input.len() {
            return Err(invalid_wall(&format!(
                "width {width} does not match input length {}",
                input.len()
            )));
        }
        Self::new(left, right, down, input)
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.input.len()
    }

    /// Colors along the top edge, one per column
    pub fn input(&self) -> &[Color] {
        &self.input
    }

    /// Fixed color of a side, `None` for the top which carries the input
    pub const fn boundary(&self, direction: Direction) -> Option<&Color> {
        match direction {
            Direction::Left => Some(&self.left),
            Direction::Right => Some(&self.right),
            Direction::Down => Some(&self.down),
            Direction::Up => None,
        }
    }

    /// Color mandated at `position` along a side
    ///
    /// For the top side `position` is a column, for the other sides the
    /// boundary color is uniform and `position` is ignored.
    pub fn mandated(&self, direction: Direction, position: usize) -> Option<&Color> {
        match direction {
            Direction::Up => self.input.get(position),
            _ => self.boundary(direction),
        }
    }
}

/// Content of one position in the search grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Ring corner, wildcard on every side
    Corner,
    /// Synthetic boundary tile showing `color` on a single side
    Sentinel {
        /// The side that carries a color
        facing: Direction,
        /// Color shown on that side
        color: Color,
    },
    /// Interior cell not yet filled
    Open,
    /// Interior cell holding the catalog tile at this index
    Placed(usize),
}

impl Slot {
    /// Color this slot shows in `direction`, `None` for wildcard sides
    pub fn facing<'a>(&'a self, direction: Direction, catalog: &'a TileSet) -> Option<&'a Color> {
        match self {
            Self::Corner | Self::Open => None,
            Self::Sentinel { facing, color } => (*facing == direction).then_some(color),
            Self::Placed(index) => catalog.get(*index).map(|tile| tile.color(direction)),
        }
    }
}

/// Wall of a fixed height padded with a ring of boundary sentinels
///
/// Indexed `[row, column]` in padded coordinates internally; the public
/// methods take interior coordinates where `(0, 0)` is the top-left cell.
#[derive(Clone, Debug)]
pub struct AugmentedGrid {
    slots: Array2<Slot>,
    width: usize,
    height: usize,
}

impl AugmentedGrid {
    /// Build an empty grid of `height` rows with the boundary ring of `spec`
    pub fn new(spec: &WallSpec, height: usize) -> Self {
        let width = spec.width();
        let slots = Array2::from_shape_fn((height + 2, width + 2), |(row, column)| {
            let top = row == 0;
            let bottom = row == height + 1;
            let left = column == 0;
            let right = column == width + 1;

            match (top || bottom, left || right) {
                (true, true) => Slot::Corner,
                (false, false) => Slot::Open,
                (true, false) => {
                    if top {
                        spec.input().get(column - 1).map_or(Slot::Corner, |color| {
                            Slot::Sentinel {
                                facing: Direction::Down,
                                color: color.clone(),
                            }
                        })
                    } else {
                        Slot::Sentinel {
                            facing: Direction::Up,
                            color: spec.down.clone(),
                        }
                    }
                }
                (false, true) => {
                    if left {
                        Slot::Sentinel {
                            facing: Direction::Right,
                            color: spec.left.clone(),
                        }
                    } else {
                        Slot::Sentinel {
                            facing: Direction::Left,
                            color: spec.right.clone(),
                        }
                    }
                }
            }
        });

        Self {
            slots,
            width,
            height,
        }
    }

    /// Number of interior columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of interior rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Slot at interior coordinates
    pub fn slot(&self, column: usize, row: usize) -> Option<&Slot> {
        self.slots.get([row + 1, column + 1])
    }

    /// Slot adjacent to an interior cell, possibly a ring sentinel
    pub fn neighbor(&self, column: usize, row: usize, direction: Direction) -> Option<&Slot> {
        let (dc, dr) = direction.offset();
        let padded_column = (column + 1).checked_add_signed(dc)?;
        let padded_row = (row + 1).checked_add_signed(dr)?;
        self.slots.get([padded_row, padded_column])
    }

    /// Color the neighbor in `direction` shows towards the cell at `(column, row)`
    pub fn neighbor_facing<'a>(
        &'a self,
        column: usize,
        row: usize,
        direction: Direction,
        catalog: &'a TileSet,
    ) -> Option<&'a Color> {
        self.neighbor(column, row, direction)
            .and_then(|slot| slot.facing(direction.opposite(), catalog))
    }

    /// Put the catalog tile `index` into an interior cell
    pub fn place(&mut self, column: usize, row: usize, index: usize) {
        if column < self.width && row < self.height {
            if let Some(slot) = self.slots.get_mut([row + 1, column + 1]) {
                *slot = Slot::Placed(index);
            }
        }
    }

    /// Empty an interior cell again
    pub fn clear(&mut self, column: usize, row: usize) {
        if column < self.width && row < self.height {
            if let Some(slot) = self.slots.get_mut([row + 1, column + 1]) {
                *slot = Slot::Open;
            }
        }
    }

    /// Catalog indices of the interior, or `None` while any cell is open
    pub fn placed_indices(&self) -> Option<Array2<usize>> {
        let mut indices = Array2::zeros((self.height, self.width));
        for ((row, column), index) in indices.indexed_iter_mut() {
            match self.slot(column, row) {
                Some(Slot::Placed(placed)) => *index = *placed,
                _ => return None,
            }
        }
        Some(indices)
    }
}

/// One filled cell of a solved wall
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement<'a> {
    /// Column, counted from the left
    pub column: usize,
    /// Row, counted from the input row downwards
    pub row: usize,
    /// Position of the tile in the catalog
    pub index: usize,
    /// The tile itself
    pub tile: &'a Tile,
}

/// Edge of a wall whose touching colors disagree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Column of the offending cell
    pub column: usize,
    /// Row of the offending cell
    pub row: usize,
    /// Side of the cell where the mismatch is
    pub direction: Direction,
    /// Color required by the neighbor or boundary
    pub expected: Color,
    /// Color shown by the cell
    pub found: Color,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell ({}, {}) shows '{}' on its {} side where '{}' is required",
            self.column, self.row, self.found, self.direction, self.expected
        )
    }
}

/// Fully tiled wall
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wall {
    spec: WallSpec,
    indices: Array2<usize>,
    tiles: Array2<Tile>,
}

impl Wall {
    /// Materialize a wall from catalog indices laid out `[row, column]`
    ///
    /// The result is not checked for validity, see [`Wall::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if the index grid width differs from the wall width,
    /// the grid has no rows, or an index is outside the catalog
    pub fn from_indices(spec: &WallSpec, catalog: &TileSet, indices: Array2<usize>) -> Result<Self> {
        let (rows, columns) = indices.dim();
        if rows == 0 {
            return Err(invalid_wall(&"a wall needs at least one row"));
        }
        if columns != spec.width() {
            return Err(invalid_wall(&format!(
                "grid has {columns} columns but the wall is {} wide",
                spec.width()
            )));
        }

        let mut tiles = Vec::with_capacity(rows * columns);
        for &index in &indices {
            let tile = catalog.get(index).ok_or_else(|| {
                invalid_wall(&format!(
                    "tile index {index} is outside a catalog of {} tiles",
                    catalog.len()
                ))
            })?;
            tiles.push(tile.clone());
        }
        let tiles = Array2::from_shape_vec((rows, columns), tiles)
            .map_err(|error| invalid_wall(&error))?;

        Ok(Self {
            spec: spec.clone(),
            indices,
            tiles,
        })
    }

    /// Boundary conditions the wall was solved for
    pub const fn spec(&self) -> &WallSpec {
        &self.spec
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Tile at a cell
    pub fn tile(&self, column: usize, row: usize) -> Option<&Tile> {
        self.tiles.get([row, column])
    }

    /// Catalog index of the tile at a cell
    pub fn catalog_index(&self, column: usize, row: usize) -> Option<usize> {
        self.indices.get([row, column]).copied()
    }

    /// Catalog indices laid out `[row, column]`
    pub const fn indices(&self) -> &Array2<usize> {
        &self.indices
    }

    /// All cells in row-major order
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_>> + '_ {
        self.tiles
            .indexed_iter()
            .zip(self.indices.iter())
            .map(|(((row, column), tile), &index)| Placement {
                column,
                row,
                index,
                tile,
            })
    }

    /// Outward-facing colors along one side
    ///
    /// Top and bottom are listed left to right, left and right top to bottom.
    pub fn boundary_colors(&self, direction: Direction) -> Vec<&Color> {
        let last_row = self.height().saturating_sub(1);
        let last_column = self.width().saturating_sub(1);

        let cells: Vec<(usize, usize)> = match direction {
            Direction::Up => (0..self.width()).map(|column| (column, 0)).collect(),
            Direction::Down => (0..self.width()).map(|column| (column, last_row)).collect(),
            Direction::Left => (0..self.height()).map(|row| (0, row)).collect(),
            Direction::Right => (0..self.height()).map(|row| (last_column, row)).collect(),
        };

        cells
            .into_iter()
            .filter_map(|(column, row)| self.tile(column, row))
            .map(|tile| tile.color(direction))
            .collect()
    }

    /// Check every interior and boundary edge
    ///
    /// # Errors
    ///
    /// Returns the first mismatching edge in row-major order, checking each
    /// cell's left, up, right and down sides in that order
    pub fn validate(&self) -> std::result::Result<(), Violation> {
        let last_row = self.height().saturating_sub(1);
        let last_column = self.width().saturating_sub(1);

        for ((row, column), tile) in self.tiles.indexed_iter() {
            for direction in Direction::ALL {
                let expected = match direction {
                    Direction::Left if column == 0 => self.spec.mandated(direction, row),
                    Direction::Up if row == 0 => self.spec.mandated(direction, column),
                    Direction::Right if column == last_column => {
                        self.spec.mandated(direction, row)
                    }
                    Direction::Down if row == last_row => self.spec.mandated(direction, column),
                    // Interior edges are checked once, from the cell left of or above them
                    Direction::Right | Direction::Down => {
                        let (dc, dr) = direction.offset();
                        column
                            .checked_add_signed(dc)
                            .zip(row.checked_add_signed(dr))
                            .and_then(|(c, r)| self.tile(c, r))
                            .map(|neighbor| neighbor.color(direction.opposite()))
                    }
                    Direction::Left | Direction::Up => continue,
                };

                let found = tile.color(direction);
                if let Some(expected) = expected {
                    if expected != found {
                        return Err(Violation {
                            column,
                            row,
                            direction,
                            expected: expected.clone(),
                            found: found.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input: Vec<&str> = self.spec.input().iter().map(Color::as_str).collect();
        writeln!(
            f,
            "{}x{} wall for input [{}]",
            self.width(),
            self.height(),
            input.join(" ")
        )?;
        for row in self.indices.rows() {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "  {}", cells.join(" "))?;
        }
        Ok(())
    }
}
