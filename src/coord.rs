//! Grid coordinates and compass directions.
//!
//! A [`Coordinate`] is always inside the `BOARD_SIZE`×`BOARD_SIZE` grid; the
//! only ways to obtain one are the bounds-checked constructor, parsing, and
//! stepping, all of which refuse to leave the board.

use core::fmt;
use core::str::FromStr;

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::common::CoordinateError;
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// A zero-indexed (row, col) position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Returns `None` when (`row`, `col`) lies outside the grid.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < N && col < N {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// The neighbouring cell one step towards `direction`, if it is on the grid.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row() as isize + dr;
        let col = self.col() as isize + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }

    /// Parse text such as `c5` or `A10` (column letter, 1-based row).
    pub fn parse(input: &str) -> Result<Self, CoordinateError> {
        let len = input.chars().count();
        if !(2..=3).contains(&len) {
            return Err(CoordinateError::WrongLength(len));
        }
        let mut chars = input.chars();
        let col_ch = chars.next().ok_or(CoordinateError::WrongLength(0))?;
        let lower = col_ch.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() || (lower as u8 - b'a') as usize >= N {
            return Err(CoordinateError::InvalidColumn(col_ch));
        }
        let col = (lower as u8 - b'a') as usize;

        let row_str = chars.as_str();
        let leading_zero = row_str.len() > 1 && row_str.starts_with('0');
        if leading_zero || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordinateError::InvalidRow);
        }
        let row: usize = row_str.parse().map_err(|_| CoordinateError::InvalidRow)?;
        if row == 0 || row > N {
            return Err(CoordinateError::RowOutOfRange(row));
        }
        Ok(Self {
            row: (row - 1) as u8,
            col: col as u8,
        })
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..N).flat_map(|r| {
            (0..N).map(move |c| Coordinate {
                row: r as u8,
                col: c as u8,
            })
        })
    }

    /// Uniformly random cell.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            row: rng.random_range(0..N) as u8,
            col: rng.random_range(0..N) as u8,
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

/// Formats as column letter plus 1-based row, e.g. `j10`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// Text form of the zero-indexed (`row`, `col`), or `None` off the grid.
#[cfg(feature = "std")]
pub fn format_coordinate(row: usize, col: usize) -> Option<String> {
    Coordinate::new(row, col).map(|c| c.to_string())
}

/// Compass direction used for ship placement and hunt probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Next direction in the fixed cycle left, right, up, down.
    pub fn next(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Left,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// (row, col) offset of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    /// Parse a placement direction token: `l`, `r`, `u` or `d`, any case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            _ => None,
        }
    }
}

impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}
