//! Theseus escaping a maze while the Minotaur closes in
//!
//! Each turn Theseus steps to an orthogonally adjacent open cell, then the
//! Minotaur takes two steps toward him. A Minotaur step prefers closing the
//! horizontal distance and falls back to the vertical one when the horizontal
//! move is blocked or unnecessary. Turns where the two meet are never taken.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{Result, parse_error};
use crate::search::breadth_first_search;

/// Cell coordinates as `(x, y)`, with `y` growing downward
pub type Position = (usize, usize);

// Theseus tries right, down, left, up
const THESEUS_MOVES: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Positions of both characters at the start of a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chase {
    /// Where Theseus stands
    pub theseus: Position,
    /// Where the Minotaur stands, if the maze has one
    pub minotaur: Option<Position>,
}

impl fmt::Display for Chase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (tx, ty) = self.theseus;
        match self.minotaur {
            Some((mx, my)) => write!(f, "T({tx}, {ty}) M({mx}, {my})"),
            None => write!(f, "T({tx}, {ty})"),
        }
    }
}

/// Parsed maze with the starting positions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    open: Array2<bool>,
    theseus: Position,
    minotaur: Option<Position>,
    exit: Position,
}

impl Maze {
    /// Parse a maze from its rows
    ///
    /// `#` is a wall, `T` Theseus, `M` the Minotaur and `E` the exit; any
    /// other character is open floor.
    ///
    /// # Errors
    ///
    /// Returns an error if rows differ in length, or if `T` or `E` is not
    /// present exactly once, or if `M` appears more than once
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if width == 0 {
            return Err(parse_error("maze", &"maze has no cells"));
        }

        let mut open = Array2::from_elem((rows.len(), width), false);
        let mut theseus = None;
        let mut minotaur = None;
        let mut exit = None;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(parse_error(
                    "maze",
                    &format!("row {y} has {} cells, expected {width}", row.chars().count()),
                ));
            }

            for (x, cell) in row.chars().enumerate() {
                let marker = match cell {
                    'T' => Some(("T", &mut theseus)),
                    'M' => Some(("M", &mut minotaur)),
                    'E' => Some(("E", &mut exit)),
                    _ => None,
                };
                if let Some((name, slot)) = marker {
                    if slot.is_some() {
                        return Err(parse_error("maze", &format!("more than one '{name}'")));
                    }
                    *slot = Some((x, y));
                }

                if let Some(free) = open.get_mut((y, x)) {
                    *free = cell != '#';
                }
            }
        }

        let theseus = theseus.ok_or_else(|| parse_error("maze", &"no 'T' in the maze"))?;
        let exit = exit.ok_or_else(|| parse_error("maze", &"no 'E' in the maze"))?;

        Ok(Self {
            open,
            theseus,
            minotaur,
            exit,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.open.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.open.nrows()
    }

    /// Starting position of Theseus
    pub const fn theseus(&self) -> Position {
        self.theseus
    }

    /// Starting position of the Minotaur
    pub const fn minotaur(&self) -> Option<Position> {
        self.minotaur
    }

    /// Exit position
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Test whether a cell is inside the maze and not a wall
    pub fn is_open(&self, (x, y): Position) -> bool {
        self.open.get((y, x)).copied().unwrap_or(false)
    }

    /// Shortest sequence of turns that brings Theseus to the exit alive
    ///
    /// The path starts at the initial positions. `None` when the Minotaur can
    /// always cut him off.
    pub fn escape(&self) -> Option<Vec<Chase>> {
        let start = Chase {
            theseus: self.theseus,
            minotaur: self.minotaur,
        };
        breadth_first_search(
            start,
            |chase| self.next_turns(chase),
            |chase| chase.theseus == self.exit,
        )
    }

    /// Shortest walk from Theseus to the exit with no Minotaur around
    pub fn escape_alone(&self) -> Option<Vec<Position>> {
        breadth_first_search(
            self.theseus,
            |&position| self.steps(position),
            |&position| position == self.exit,
        )
    }

    fn next_turns(&self, chase: &Chase) -> Vec<Chase> {
        self.steps(chase.theseus)
            .into_iter()
            .filter_map(|theseus| {
                let minotaur = chase
                    .minotaur
                    .map(|minotaur| self.pursue(minotaur, theseus));
                (minotaur != Some(theseus)).then_some(Chase { theseus, minotaur })
            })
            .collect()
    }

    fn steps(&self, position: Position) -> Vec<Position> {
        THESEUS_MOVES
            .iter()
            .filter_map(|&(dx, dy)| offset(position, dx, dy))
            .filter(|&next| self.is_open(next))
            .collect()
    }

    fn pursue(&self, minotaur: Position, target: Position) -> Position {
        let (mut mx, mut my) = minotaur;
        let (tx, ty) = target;

        for _ in 0..2 {
            let horizontal = offset((mx, my), toward(mx, tx), 0);
            if mx != tx
                && let Some(next) = horizontal.filter(|&next| self.is_open(next))
            {
                mx = next.0;
                continue;
            }

            let vertical = offset((mx, my), 0, toward(my, ty));
            if my != ty
                && let Some(next) = vertical.filter(|&next| self.is_open(next))
            {
                my = next.1;
            }
        }

        (mx, my)
    }
}

fn toward(from: usize, to: usize) -> isize {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => 1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => -1,
    }
}

fn offset((x, y): Position, dx: isize, dy: isize) -> Option<Position> {
    Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?))
}
