//! Edge-colored tiles and tile catalogs
//!
//! A tile carries one color per side. Two tiles may touch along an edge only
//! when the colors facing each other are equal. Colors are opaque comparable
//! tokens; `#rrggbb` strings are additionally understood as paint when a wall
//! is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::io::error::{Result, TilingError};

/// Comparable color token placed on a tile side or wall boundary
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawColor", into = "String")]
pub struct Color(String);

// Problem files may spell colors as strings or bare integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Text(String),
    Integer(i64),
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        match raw {
            RawColor::Text(text) => Self(text),
            RawColor::Integer(value) => Self(value.to_string()),
        }
    }
}

impl Color {
    /// Create a color from any textual token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Textual form of the token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `#rrggbb` tokens into RGB components
    ///
    /// Any other token is a symbolic color and yields `None`.
    pub fn hex_rgb(&self) -> Option<[u8; 3]> {
        let digits = self.0.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
    }

    /// Split a string into one color per character
    ///
    /// Convenient for wall inputs such as `"10110111"` or `"(()())()"`.
    pub fn sequence(symbols: &str) -> Vec<Self> {
        symbols.chars().map(Self::from).collect()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Color {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<char> for Color {
    fn from(symbol: char) -> Self {
        Self(symbol.to_string())
    }
}

impl From<usize> for Color {
    fn from(value: usize) -> Self {
        Self(value.to_string())
    }
}

/// Side of a tile or wall
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards column 0
    Left,
    /// Towards row 0 (the input row)
    Up,
    /// Towards the last column
    Right,
    /// Towards the last row
    Down,
}

impl Direction {
    /// All directions in tile storage order
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// Direction facing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// Position of this side in a `[left, up, right, down]` array
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 3,
        }
    }

    /// Column and row delta of the neighbor in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}

/// Immutable tile with one color per side
///
/// Serialized as `[left, up, right, down]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[Color; 4]", into = "[Color; 4]")]
pub struct Tile {
    colors: [Color; 4],
}

impl Tile {
    /// Create a tile from its four side colors
    pub fn new(
        left: impl Into<Color>,
        up: impl Into<Color>,
        right: impl Into<Color>,
        down: impl Into<Color>,
    ) -> Self {
        Self {
            colors: [left.into(), up.into(), right.into(), down.into()],
        }
    }

    /// Color on the given side
    pub const fn color(&self, direction: Direction) -> &Color {
        match direction {
            Direction::Left => &self.colors[0],
            Direction::Up => &self.colors[1],
            Direction::Right => &self.colors[2],
            Direction::Down => &self.colors[3],
        }
    }

    /// All four colors as `[left, up, right, down]`
    pub const fn colors(&self) -> &[Color; 4] {
        &self.colors
    }

    /// Test whether `other`, placed in `direction` from this tile, shares a matching edge
    pub fn matches(&self, other: &Self, direction: Direction) -> bool {
        self.color(direction) == other.color(direction.opposite())
    }
}

impl From<[Color; 4]> for Tile {
    fn from(colors: [Color; 4]) -> Self {
        Self { colors }
    }
}

impl From<Tile> for [Color; 4] {
    fn from(tile: Tile) -> Self {
        tile.colors
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, up, right, down] = &self.colors;
        write!(f, "Tile({left}, {up}, {right}, {down})")
    }
}

/// Ordered, non-empty tile catalog
///
/// The order is the trial order of the solver. Tiles are a catalog, not a
/// stock: a solved wall may use any tile any number of times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Create a catalog from tiles in trial order
    ///
    /// # Errors
    ///
    /// Returns `TilingError::EmptyCatalog` if `tiles` is empty
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(TilingError::EmptyCatalog);
        }
        Ok(Self { tiles })
    }

    /// Number of tiles in the catalog
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false, catalogs are non-empty by construction
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a catalog index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tiles in catalog order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate tiles in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Test whether any tile shows `color` on the given side
    pub fn offers(&self, direction: Direction, color: &Color) -> bool {
        self.tiles.iter().any(|tile| tile.color(direction) == color)
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
