//! Ship definitions and placement footprints.

use core::fmt;

use crate::common::BoardError;
use crate::config::{MAX_SHIP_LENGTH, NUM_SHIPS, SHIPS};
use crate::coord::{Coordinate, Direction};

/// Type of ship: name, length and the marker drawn on its owner's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
    marker: char,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize, marker: char) -> Self {
        Self {
            name,
            length,
            marker,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Single-character marker shown on the ocean grid.
    pub fn marker(&self) -> char {
        self.marker
    }
}

/// Which of the fleet's ships occupies a cell; an index into [`SHIPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipKind(u8);

impl ShipKind {
    pub fn new(index: usize) -> Option<Self> {
        (index < NUM_SHIPS).then_some(ShipKind(index as u8))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn ship_type(&self) -> ShipType {
        SHIPS[self.index()]
    }

    pub fn name(&self) -> &'static str {
        self.ship_type().name()
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The contiguous cells a ship covers, without touching any grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    cells: [Coordinate; MAX_SHIP_LENGTH],
    len: usize,
}

impl Footprint {
    /// Cells covered by a ship of `length` starting at `origin` and extending
    /// towards `direction`. Fails if any cell falls off the grid.
    pub fn new(origin: Coordinate, direction: Direction, length: usize) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidIndex);
        }
        let mut cells = [origin; MAX_SHIP_LENGTH];
        let mut cursor = origin;
        for cell in cells.iter_mut().take(length).skip(1) {
            cursor = cursor.step(direction).ok_or(BoardError::ShipOutOfBounds)?;
            *cell = cursor;
        }
        Ok(Self { cells, len: length })
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells[..self.len].iter().copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.iter().any(|c| c == coord)
    }
}

impl fmt::Debug for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A ship placed on the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    origin: Coordinate,
    direction: Direction,
    footprint: Footprint,
}

impl Ship {
    /// Lay out ship `kind` at `origin` towards `direction`.
    pub fn new(kind: ShipKind, origin: Coordinate, direction: Direction) -> Result<Self, BoardError> {
        let footprint = Footprint::new(origin, direction, kind.ship_type().length())?;
        Ok(Ship {
            kind,
            origin,
            direction,
            footprint,
        })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, direction: {:?}, cells: {:?} }}",
            self.kind.name(),
            self.origin,
            self.direction,
            self.footprint,
        )
    }
}
