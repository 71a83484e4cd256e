//! The turn-source capability shared by human and scripted players.

use rand::rngs::SmallRng;

use crate::{board::Board, common::ShotResult, coord::Coordinate, grid::Grid};

/// What a player does with their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Fire at the given cell.
    Fire(Coordinate),
    /// Suspend targeting and open the menu.
    Menu,
}

/// How a fleet gets onto the board at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    Manual,
    Automatic,
}

impl PlacementMode {
    /// Map the answer to the placement question: `m` or `a`, any case.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim() {
            a if a.eq_ignore_ascii_case("m") => Some(PlacementMode::Manual),
            a if a.eq_ignore_ascii_case("a") => Some(PlacementMode::Automatic),
            _ => None,
        }
    }
}

/// Entries of the in-game menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Statistics,
    Info,
    Resume,
    Reset,
    Quit,
}

impl MenuChoice {
    /// Map the number typed at the menu prompt.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Statistics),
            2 => Some(MenuChoice::Info),
            3 => Some(MenuChoice::Resume),
            4 => Some(MenuChoice::Reset),
            5 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Source of turns for one side of a match.
///
/// A source is responsible for:
/// - Placing its fleet on the board
/// - Choosing a shot (or asking for the menu) each turn
/// - Handling feedback from shots
pub trait TurnSource {
    /// Lay out the whole fleet on `board`.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()>;

    /// Choose this turn's action given the player's own target grid.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Grid) -> anyhow::Result<TurnAction>;

    /// Pick a menu entry after [`TurnAction::Menu`]. Sources without a menu resume.
    fn choose_menu(&mut self) -> anyhow::Result<MenuChoice> {
        Ok(MenuChoice::Resume)
    }

    /// Wait for the user to acknowledge a screen (statistics, info).
    fn acknowledge(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the source of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coordinate, _result: ShotResult) {}

    /// Inform the source of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coord: Coordinate, _result: ShotResult) {}

    /// Forget any per-match memory before a reset.
    fn reset(&mut self) {}
}
