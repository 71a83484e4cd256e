//! Common types for the game: board and coordinate errors and shot results.

use crate::ship::ShipKind;

/// Result of a shot resolved against an ocean grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot missed all ships.
    Miss,
    /// Shot struck an intact segment of the given ship.
    Hit(ShipKind),
    /// Shot struck the last intact segment of the given ship.
    Sunk(ShipKind),
    /// Shot landed on a segment that was already hit.
    AlreadyHit,
}

impl ShotResult {
    /// `true` for every outcome that lands on a ship.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is outside the grid.
    IndexOutOfBounds { row: usize, col: usize },
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Random and exhaustive placement both failed.
    UnableToPlaceShip,
    /// Every cell of the target grid has already been fired at.
    NoUntriedCells,
    /// Fleet constants are inconsistent with the board.
    InvalidFleet(&'static str),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::IndexOutOfBounds { row, col } => {
                write!(f, "Index out of bounds: row={}, col={}", row, col)
            }
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::NoUntriedCells => write!(f, "Every cell has already been fired at"),
            BoardError::InvalidFleet(reason) => write!(f, "Invalid fleet configuration: {}", reason),
        }
    }
}

impl core::error::Error for BoardError {}

/// Errors returned when parsing a textual coordinate such as `c5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    /// Input is not 2 or 3 characters long.
    WrongLength(usize),
    /// First character is not a column letter `a`-`j`.
    InvalidColumn(char),
    /// Row part is not a plain decimal number.
    InvalidRow,
    /// Row number is outside `1..=10`.
    RowOutOfRange(usize),
}

impl core::fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoordinateError::WrongLength(n) => write!(
                f,
                "expected a column letter and row number (e.g. c5), got {} characters",
                n
            ),
            CoordinateError::InvalidColumn(c) => {
                write!(f, "invalid column '{}' - must be a letter A-J", c)
            }
            CoordinateError::InvalidRow => write!(f, "invalid row - must be a number 1-10"),
            CoordinateError::RowOutOfRange(r) => {
                write!(f, "row {} out of bounds - must be 1-10", r)
            }
        }
    }
}

impl core::error::Error for CoordinateError {}
