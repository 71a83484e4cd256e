#![cfg(feature = "std")]

//! Text rendering. Every function here is pure: it builds a string from
//! game state and leaves printing to the caller.

use std::fmt;

use crate::{
    config::{BOARD_SIZE, TOTAL_SHIP_CELLS},
    game::{PlayerState, Statistics},
    grid::{Cell, Grid},
};

const N: usize = BOARD_SIZE as usize;
const GAP: &str = "        ";

fn ocean_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Ship(kind) => kind.ship_type().marker(),
        Cell::Miss => 'o',
        Cell::Hit => 'X',
    }
}

fn target_symbol(cell: Cell) -> char {
    match cell {
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::Empty | Cell::Ship(_) => '.',
    }
}

fn column_header() -> String {
    let mut s = String::from("    ");
    for c in 0..N {
        s.push(' ');
        s.push((b'A' + c as u8) as char);
    }
    s
}

fn grid_row(grid: &Grid, row: usize, symbol: fn(Cell) -> char) -> String {
    let mut s = format!(" {:02} ", row + 1);
    if let Some(cells) = grid.rows().nth(row) {
        for &cell in cells.iter() {
            s.push(' ');
            s.push(symbol(cell));
        }
    }
    s
}

/// Two-panel view for one player: their own fleet on the left, what they
/// know about the enemy on the right.
pub struct BoardView<'a> {
    pub player: &'a PlayerState,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = column_header();
        let width = header.len();
        writeln!(f, "{:<width$}{GAP}{}", "    Your fleet", "    Enemy waters")?;
        writeln!(f, "{header}{GAP}{header}")?;
        for r in 0..N {
            writeln!(
                f,
                "{:<width$}{GAP}{}",
                grid_row(self.player.board().ocean(), r, ocean_symbol),
                grid_row(self.player.target(), r, target_symbol),
            )?;
        }
        writeln!(f, "{header}{GAP}{header}")?;
        writeln!(f)?;
        write!(f, "    Legend: c b r s d = ships  X = hit  o = miss  . = water")
    }
}

/// Render the two-panel board for `player`.
pub fn render_boards(player: &PlayerState) -> String {
    BoardView { player }.to_string()
}

/// Render a lone ocean grid, used while the fleet is being placed.
pub fn render_ocean(grid: &Grid) -> String {
    let header = column_header();
    let mut s = format!("{header}\n");
    for r in 0..N {
        s.push_str(&grid_row(grid, r, ocean_symbol));
        s.push('\n');
    }
    s.push_str(&header);
    s
}

/// Statistics table with one row per player.
pub struct StatisticsView<'a> {
    pub rows: &'a [Statistics],
}

impl fmt::Display for StatisticsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "               |    empty   |   miss   |   hit   |   overall performance"
        )?;
        writeln!(f, "    {}", "=".repeat(71))?;
        for s in self.rows {
            writeln!(f, "               |            |          |         |")?;
            writeln!(
                f,
                "    {:<10} |    {:>5}   |   {:>4}   |   {:>3}   |   {:>17} %",
                s.name, s.empty, s.miss, s.hit, s.performance
            )?;
        }
        writeln!(f, "               |            |          |         |")?;
        writeln!(f, "    {}", "=".repeat(71))?;
        write!(f, "    ({} ship cells per fleet)", TOTAL_SHIP_CELLS)
    }
}

pub fn render_statistics(rows: &[Statistics]) -> String {
    StatisticsView { rows }.to_string()
}

/// Title banner, also shown from the menu's info entry.
pub fn welcome() -> String {
    let mut s = String::new();
    s.push_str("    * * * * * * * * * * * * * * * * * * * *\n");
    s.push_str("    *                                     *\n");
    s.push_str("    *    B A T T L E S H I P  G A M E     *\n");
    s.push_str("    *                                     *\n");
    s.push_str("    * * * * * * * * * * * * * * * * * * * *\n\n");
    s.push_str(&format!("    version {}\n\n", env!("CARGO_PKG_VERSION")));
    s.push_str("    Fire by typing a cell such as c5 or J10.\n");
    s.push_str("    Type 'menu' instead of a cell for statistics, reset or quit.\n");
    s
}

pub fn menu() -> &'static str {
    "    ----------------------------------------------\n\
     \x20   Main Menu:\n\
     \x20   ----------------------------------------------\n\
     \n\
     \x20   1) statistics\n\
     \x20   2) info\n\
     \x20   3) return to game\n\
     \x20   4) reset game\n\
     \x20   5) quit game\n\
     \n\
     \x20   ----------------------------------------------"
}

pub fn winner_banner(name: &str) -> String {
    format!("***\n*** The winner is: {}!!! ***\n***", name)
}
