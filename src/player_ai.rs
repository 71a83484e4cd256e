//! Scripted opponent.

use rand::rngs::SmallRng;

use crate::{
    ai::HuntState,
    board::Board,
    common::ShotResult,
    coord::Coordinate,
    grid::Grid,
    player::{TurnAction, TurnSource},
};

/// Scripted opponent driven by the hunt/search engine.
#[derive(Debug, Default)]
pub struct AiPlayer {
    state: HuntState,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current targeting mode.
    pub fn state(&self) -> HuntState {
        self.state
    }
}

impl TurnSource for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        board.place_all_random(rng)?;
        Ok(())
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Grid) -> anyhow::Result<TurnAction> {
        let (state, coord) = self.state.next_shot(target, rng)?;
        self.state = state;
        Ok(TurnAction::Fire(coord))
    }

    fn handle_shot_result(&mut self, coord: Coordinate, result: ShotResult) {
        self.state = self.state.observe(coord, result.is_hit());
    }

    fn reset(&mut self) {
        self.state = HuntState::Search;
    }
}
