//! Problem files: a tile catalog, a wall to tile and a height bound
//!
//! Problems are JSON documents:
//!
//! ```json
//! { "name": "divby3",
//!   "wall": { "left": "0", "right": "0", "down": "#b91e2f", "input": "10110111" },
//!   "tiles": [["0", "0", "0", "#b91e2f"]],
//!   "max_height": 1 }
//! ```
//!
//! Tiles list their colors as `[left, up, right, down]`. Colors may be
//! strings or integers. A string `input` holds one color per character.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::algorithm::executor::{HeightAttempt, TileSolver};
use crate::io::configuration::DEFAULT_MAX_HEIGHT;
use crate::io::error::{Result, TilingError, invalid_parameter, parse_error};
use crate::spatial::grid::{Wall, WallSpec};
use crate::spatial::tiles::{Color, Tile, TileSet};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProblemFile {
    name: Option<String>,
    wall: WallFile,
    tiles: Vec<Tile>,
    max_height: Option<usize>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WallFile {
    left: Color,
    right: Color,
    down: Color,
    input: InputFile,
    width: Option<usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    Symbols(String),
    Colors(Vec<Color>),
}

impl InputFile {
    fn into_colors(self) -> Vec<Color> {
        match self {
            Self::Symbols(symbols) => Color::sequence(&symbols),
            Self::Colors(colors) => colors,
        }
    }
}

/// A named tiling problem ready to solve
#[derive(Clone, Debug)]
pub struct Problem {
    /// Display name, taken from the file or its stem
    pub name: String,
    /// Tiles available to the solver, in trial order
    pub catalog: TileSet,
    /// Wall boundary conditions
    pub wall: WallSpec,
    /// Tallest wall the solver will try
    pub max_height: usize,
}

impl Problem {
    /// Assemble a problem from parts
    ///
    /// # Errors
    ///
    /// Returns an error if `max_height` is zero
    pub fn new(
        name: impl Into<String>,
        catalog: TileSet,
        wall: WallSpec,
        max_height: usize,
    ) -> Result<Self> {
        if max_height == 0 {
            return Err(invalid_parameter(
                "max_height",
                &max_height,
                &"must be at least 1",
            ));
        }

        Ok(Self {
            name: name.into(),
            catalog,
            wall,
            max_height,
        })
    }

    /// Parse a problem from JSON text
    ///
    /// `fallback_name` is used when the document has no `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid problem document or
    /// describes an unusable wall or catalog
    pub fn from_json(text: &str, fallback_name: &str) -> Result<Self> {
        let file: ProblemFile =
            serde_json::from_str(text).map_err(|err| parse_error("problem", &err))?;
        Self::from_file(file, fallback_name)
    }

    /// Load a problem file, naming it after the file stem if unnamed
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded, or describes an
    /// unusable wall or catalog
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TilingError::FileSystem {
            path: path.to_path_buf(),
            operation: "read problem",
            source,
        })?;
        let file: ProblemFile =
            serde_json::from_str(&text).map_err(|source| TilingError::ProblemLoad {
                path: path.to_path_buf(),
                source,
            })?;

        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_file(file, &stem)
    }

    /// Lowest tiling of the wall, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the solver preconditions fail
    pub fn solve(&self) -> Result<Option<Wall>> {
        self.solve_observed(|_| {})
    }

    /// Same as [`Problem::solve`], reporting every attempted height
    ///
    /// # Errors
    ///
    /// Returns an error if the solver preconditions fail
    pub fn solve_observed<F>(&self, observer: F) -> Result<Option<Wall>>
    where
        F: FnMut(&HeightAttempt),
    {
        TileSolver::new(self.catalog.clone()).solve_observed(&self.wall, self.max_height, observer)
    }

    fn from_file(file: ProblemFile, fallback_name: &str) -> Result<Self> {
        let WallFile {
            left,
            right,
            down,
            input,
            width,
        } = file.wall;
        let input = input.into_colors();

        let wall = match width {
            Some(width) => WallSpec::with_width(width, left, right, down, input)?,
            None => WallSpec::new(left, right, down, input)?,
        };
        let catalog = TileSet::new(file.tiles)?;
        let name = file.name.unwrap_or_else(|| fallback_name.to_owned());

        Self::new(
            name,
            catalog,
            wall,
            file.max_height.unwrap_or(DEFAULT_MAX_HEIGHT),
        )
    }
}
