//! Fixed-size square grid of cells.
//!
//! The same type backs both a player's ocean grid (own ships plus incoming
//! shots) and their target grid (outcomes of shots fired at the opponent);
//! the target grid only ever holds `Empty`, `Miss` and `Hit`.

use core::fmt;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::ship::ShipKind;

const N: usize = BOARD_SIZE as usize;

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship(ShipKind),
    Miss,
    Hit,
}

impl Cell {
    /// `true` for cells that record a shot.
    pub fn is_fired(&self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; N]; N],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a grid with every cell `Empty`.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Bounds-checked read.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Bounds-checked write.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Read through an already-validated coordinate.
    pub fn at(&self, coord: Coordinate) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Write through an already-validated coordinate.
    pub fn put(&mut self, coord: Coordinate, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Fill every cell with `Empty`.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; N]; N];
    }

    /// Number of cells satisfying `pred`.
    pub fn count(&self, pred: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().flatten().filter(|c| pred(**c)).count()
    }

    /// Number of cells still holding an intact ship segment.
    pub fn ship_cells(&self) -> usize {
        self.count(|c| matches!(c, Cell::Ship(_)))
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; N]> {
        self.cells.iter()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= N || col >= N {
            Err(BoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship(kind) => kind.ship_type().marker(),
                    Cell::Miss => 'o',
                    Cell::Hit => 'x',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
