#![cfg(feature = "std")]

use std::io::Write;

use anyhow::bail;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    config,
    coord::Coordinate,
    game::{GameStatus, PlayerState},
    player::{MenuChoice, TurnAction, TurnSource},
    ui,
};

pub const USER_NAME: &str = "User";
pub const COMPUTER_NAME: &str = "Computer";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A player hit every enemy ship cell.
    Winner(&'static str),
    /// The user chose quit from the menu.
    Quit,
}

/// One human-facing match: the user against a scripted computer, turn by turn.
pub struct Session<W: Write> {
    user: PlayerState,
    computer: PlayerState,
    human: Box<dyn TurnSource>,
    opponent: Box<dyn TurnSource>,
    rng: SmallRng,
    out: W,
    quit: bool,
    rounds: usize,
}

impl<W: Write> Session<W> {
    /// Build a session. Fails if the fleet constants do not fit the board.
    pub fn new(
        human: Box<dyn TurnSource>,
        opponent: Box<dyn TurnSource>,
        rng: SmallRng,
        out: W,
    ) -> anyhow::Result<Self> {
        config::validate_fleet()?;
        Ok(Self {
            user: PlayerState::new(USER_NAME),
            computer: PlayerState::new(COMPUTER_NAME),
            human,
            opponent,
            rng,
            out,
            quit: false,
            rounds: 0,
        })
    }

    pub fn user(&self) -> &PlayerState {
        &self.user
    }

    pub fn computer(&self) -> &PlayerState {
        &self.computer
    }

    /// Completed user turns since the last setup.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Clear both sides and lay out both fleets, computer first.
    pub fn setup(&mut self) -> anyhow::Result<()> {
        self.user.reset();
        self.computer.reset();
        self.human.reset();
        self.opponent.reset();
        self.rounds = 0;
        self.quit = false;

        self.opponent
            .place_ships(&mut self.rng, self.computer.board_mut())?;
        self.computer.finish_setup()?;
        self.human.place_ships(&mut self.rng, self.user.board_mut())?;
        self.user.finish_setup()?;
        info!("fleets placed, starting match");
        Ok(())
    }

    /// Alternate turns until someone wins or the user quits.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        if !self.user.is_initialized() || !self.computer.is_initialized() {
            bail!("The battlefield was not initialized. Game aborted.");
        }
        loop {
            // user turn
            self.show_board()?;
            let coord = match self.human.select_target(&mut self.rng, self.user.target())? {
                TurnAction::Fire(coord) => coord,
                TurnAction::Menu => {
                    self.run_menu()?;
                    if self.quit {
                        info!("user quit after {} rounds", self.rounds);
                        return Ok(Outcome::Quit);
                    }
                    continue;
                }
            };
            self.user_fires(coord);
            self.rounds += 1;
            if self.user.status() == GameStatus::Won {
                return self.finish(USER_NAME);
            }

            // computer turn
            let coord = match self.opponent.select_target(&mut self.rng, self.computer.target())? {
                TurnAction::Fire(coord) => coord,
                TurnAction::Menu => bail!("the computer cannot open the menu"),
            };
            self.computer_fires(coord);
            if self.computer.status() == GameStatus::Won {
                return self.finish(COMPUTER_NAME);
            }
        }
    }

    fn user_fires(&mut self, coord: Coordinate) {
        let result = self.computer.resolve_shot(coord);
        self.user.record_shot(coord, result);
        debug!("{} fires at {}: {:?}", USER_NAME, coord, result);
        self.human.handle_shot_result(coord, result);
        self.opponent.handle_opponent_shot(coord, result);
    }

    fn computer_fires(&mut self, coord: Coordinate) {
        let result = self.user.resolve_shot(coord);
        self.computer.record_shot(coord, result);
        debug!("{} fires at {}: {:?}", COMPUTER_NAME, coord, result);
        self.opponent.handle_shot_result(coord, result);
        self.human.handle_opponent_shot(coord, result);
    }

    fn run_menu(&mut self) -> anyhow::Result<()> {
        loop {
            match self.human.choose_menu()? {
                MenuChoice::Statistics => {
                    let rows = [self.user.statistics(), self.computer.statistics()];
                    writeln!(self.out, "\n{}\n", ui::render_statistics(&rows))?;
                    self.human.acknowledge()?;
                }
                MenuChoice::Info => {
                    writeln!(self.out, "\n{}", ui::welcome())?;
                    self.human.acknowledge()?;
                }
                MenuChoice::Resume => return Ok(()),
                MenuChoice::Reset => {
                    info!("match reset from menu");
                    return self.setup();
                }
                MenuChoice::Quit => {
                    self.quit = true;
                    return Ok(());
                }
            }
        }
    }

    fn show_board(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "\n{}", ui::render_boards(&self.user))?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, winner: &'static str) -> anyhow::Result<Outcome> {
        info!("{} wins after {} rounds", winner, self.rounds);
        self.show_board()?;
        writeln!(self.out, "\n\n{}\n", ui::winner_banner(winner))?;
        Ok(Outcome::Winner(winner))
    }
}
