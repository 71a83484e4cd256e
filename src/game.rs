//! Per-player match state: fleet, shot record, hit counter and statistics.

use crate::{
    board::Board,
    common::{BoardError, ShotResult},
    config::TOTAL_SHIP_CELLS,
    coord::Coordinate,
    grid::{Cell, Grid},
};

/// Current status of a game from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Target-grid tallies for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Statistics {
    pub name: &'static str,
    pub empty: usize,
    pub miss: usize,
    pub hit: usize,
    /// Percentage of the enemy fleet destroyed, rounded down.
    pub performance: usize,
}

/// Everything one player owns: their fleet, their record of shots fired at
/// the opponent, and their hit counter.
#[derive(Debug, Clone, Copy)]
pub struct PlayerState {
    name: &'static str,
    board: Board,
    target: Grid,
    hit_counter: usize,
    initialized: bool,
}

impl PlayerState {
    /// Create a player with empty grids.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            board: Board::new(),
            target: Grid::new(),
            hit_counter: 0,
            initialized: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Clear both grids and the hit counter.
    pub fn reset(&mut self) {
        self.board.reset();
        self.target.reset();
        self.hit_counter = 0;
        self.initialized = false;
    }

    /// Mutable reference to the player's board for ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Immutable reference to the player's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shots this player has fired at the opponent.
    pub fn target(&self) -> &Grid {
        &self.target
    }

    pub fn hit_counter(&self) -> usize {
        self.hit_counter
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Mark the fleet as ready. Fails while any ship is still missing.
    pub fn finish_setup(&mut self) -> Result<(), BoardError> {
        if !self.board.all_placed() {
            return Err(BoardError::UnableToPlaceShip);
        }
        self.initialized = true;
        Ok(())
    }

    /// Handle an opponent shot against this player's ocean grid.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> ShotResult {
        self.board.receive_shot(coord)
    }

    /// Record the outcome of a shot this player fired at the opponent.
    ///
    /// Only a fresh hit moves the hit counter, so repeated shots at the same
    /// ship segment are counted once.
    pub fn record_shot(&mut self, coord: Coordinate, result: ShotResult) {
        match result {
            ShotResult::Hit(_) | ShotResult::Sunk(_) => {
                if self.target.at(coord) != Cell::Hit {
                    self.hit_counter += 1;
                }
                self.target.put(coord, Cell::Hit);
            }
            ShotResult::AlreadyHit => self.target.put(coord, Cell::Hit),
            ShotResult::Miss => {
                if self.target.at(coord) != Cell::Hit {
                    self.target.put(coord, Cell::Miss);
                }
            }
        }
    }

    /// `Won` once every enemy ship cell has been hit.
    pub fn status(&self) -> GameStatus {
        if self.hit_counter >= TOTAL_SHIP_CELLS {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Tally the target grid.
    pub fn statistics(&self) -> Statistics {
        let hit = self.target.count(|c| c == Cell::Hit);
        Statistics {
            name: self.name,
            empty: self.target.count(|c| c == Cell::Empty),
            miss: self.target.count(|c| c == Cell::Miss),
            hit,
            performance: 100 * hit / TOTAL_SHIP_CELLS,
        }
    }
}
