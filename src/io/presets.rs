//! Built-in example problems
//!
//! Each preset is a small catalog that recognizes a language by tiling: the
//! wall can be tiled exactly when its input row belongs to the language.

use crate::io::error::{Result, invalid_parameter};
use crate::io::problem::Problem;
use crate::spatial::grid::WallSpec;
use crate::spatial::tiles::{Color, Tile, TileSet};

/// Four paint colors shared by the presets
pub const PALETTE: [&str; 4] = ["#b91e2f", "#f68828", "#cdd190", "#122f30"];

const BLACK: &str = "#000000";
const RED: &str = "#fc6255";
const BLUE: &str = "#58c4dd";

const P0: &str = PALETTE[0];
const P1: &str = PALETTE[1];
const P2: &str = PALETTE[2];
const P3: &str = PALETTE[3];

/// Names accepted by [`preset`], in listing order
pub const PRESET_NAMES: [&str; 5] = [
    "even_size",
    "divby3",
    "parentheses",
    "parentheses_log",
    "palindrome",
];

/// Look up a preset by name
///
/// # Errors
///
/// Returns an error for names not in `PRESET_NAMES`
pub fn preset(name: &str) -> Result<Problem> {
    match name {
        // Runs of ones with even length: the two tiles alternate
        "even_size" => build(name, [P1, P1, P0], "111111", 1, &[
            [P1, "1", P2, P0],
            [P2, "1", P1, P0],
        ]),
        // Binary numbers divisible by three: the side color carries the
        // remainder of the prefix read so far
        "divby3" => build(name, ["0", "0", P0], "10110111", 1, &[
            ["0", "0", "0", P0],
            ["1", "0", "1", P0],
            ["2", "0", "2", P0],
            ["0", "1", "1", P0],
            ["1", "1", "2", P0],
            ["2", "1", "0", P0],
        ]),
        // Balanced parentheses, one row per nesting level
        "parentheses" => build(name, [P3, P3, P3], "(()())()", 2, &[
            [P3, "(", P2, P3],
            [P2, ")", P3, P3],
            [P3, "(", P3, P1],
            [P3, P1, P3, P1],
            [P1, P3, P1, P3],
            [P3, P1, P1, P3],
            [P1, P0, P3, P3],
            [P3, P0, P3, P0],
            [P3, ")", P3, P0],
            [P3, P3, P3, P3],
        ]),
        // Nested parentheses counted in binary, so height grows with the
        // logarithm of the depth
        "parentheses_log" => build(name, [P0, P1, BLACK], "((()))", 4, &[
            [P0, "(", "1", BLACK],
            [P0, BLACK, BLACK, BLACK],
            ["1", "(", "0", "+"],
            ["0", "(", "1", BLACK],
            [BLACK, "+", "1", BLACK],
            ["1", BLACK, "1", BLACK],
            ["0", BLACK, "0", BLACK],
            ["0", BLACK, BLACK, BLACK],
            ["1", ")", "0", BLACK],
            ["0", ")", "1", "-"],
            ["1", ")", P1, BLACK],
            ["1", "-", "0", BLACK],
            ["0", "-", "1", "-"],
            ["1", "-", BLACK, BLACK],
            [BLACK, BLACK, P1, BLACK],
            ["0", BLACK, P1, BLACK],
            [BLACK, BLACK, BLACK, BLACK],
        ]),
        // Binary palindromes
        "palindrome" => build(name, [P1, P0, BLACK], "10100101", 4, &[
            [P1, "1", RED, BLACK],
            [RED, "1", P0, BLACK],
            [RED, "1", RED, "1"],
            [RED, "0", RED, "0"],
            [P0, BLACK, P0, BLACK],
            [P1, BLACK, P1, BLACK],
            [P1, "0", BLUE, BLACK],
            [BLUE, "0", P0, BLACK],
            [BLUE, "1", BLUE, "1"],
            [BLUE, "0", BLUE, "0"],
            [P1, "0", P0, BLACK],
            [P1, "1", P0, BLACK],
        ]),
        _ => Err(invalid_parameter(
            "preset",
            &name,
            &format!("expected one of {}", PRESET_NAMES.join(", ")),
        )),
    }
}

/// Every preset, in `PRESET_NAMES` order
///
/// # Errors
///
/// Returns an error if a preset fails to build
pub fn all_presets() -> Result<Vec<Problem>> {
    PRESET_NAMES.iter().map(|name| preset(name)).collect()
}

// `sides` is `[left, right, down]`, tiles are `[left, up, right, down]`
fn build(
    name: &str,
    sides: [&str; 3],
    input: &str,
    max_height: usize,
    tiles: &[[&str; 4]],
) -> Result<Problem> {
    let [left, right, down] = sides;
    let catalog = TileSet::new(
        tiles
            .iter()
            .map(|&[l, u, r, d]| Tile::new(l, u, r, d))
            .collect(),
    )?;
    let wall = WallSpec::new(left, right, down, Color::sequence(input))?;
    Problem::new(name, catalog, wall, max_height)
}
