#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::anyhow;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::ShotResult,
    config::{NUM_SHIPS, SHIPS},
    coord::{Coordinate, Direction},
    grid::Grid,
    player::{MenuChoice, PlacementMode, TurnAction, TurnSource},
    ui,
};

/// Reserved token that opens the menu instead of firing.
pub const MENU_TOKEN: &str = "menu";

/// Parse a manual placement such as `a1r` or `C5 d`: a coordinate followed by
/// one of `l`, `r`, `u`, `d`.
pub fn parse_placement(input: &str) -> Result<(Coordinate, Direction), String> {
    let input = input.trim();
    let dir_ch = input
        .chars()
        .last()
        .ok_or_else(|| "Empty input".to_string())?;
    let direction = Direction::from_char(dir_ch).ok_or_else(|| {
        format!("Invalid direction '{}' - end with l, r, u or d", dir_ch)
    })?;
    let coord_str = input[..input.len() - dir_ch.len_utf8()].trim_end();
    let origin = Coordinate::parse(coord_str).map_err(|e| e.to_string())?;
    Ok((origin, direction))
}

/// Interactive human player reading commands from `input`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    auto_place: bool,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player wired to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            auto_place: false,
        }
    }

    /// Skip the manual/automatic question and always place at random.
    pub fn with_auto_place(mut self, auto_place: bool) -> Self {
        self.auto_place = auto_place;
        self
    }

    /// Consume the player and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn ask(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "\n    {}: ", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message);
    }

    fn place_manually(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        for i in 0..NUM_SHIPS {
            let def = SHIPS[i];
            loop {
                self.say(&ui::render_ocean(board.ocean()));
                let prompt = format!(
                    "Choose {} ({}) position and direction (e.g. a1r, ENTER for random)",
                    def.name(),
                    def.length()
                );
                let line = self
                    .ask(&prompt)?
                    .ok_or_else(|| anyhow!("input closed during ship placement"))?;

                if line.is_empty() {
                    let (origin, direction) = board.random_placement(rng, i)?;
                    board.place(i, origin, direction)?;
                    self.say(&format!("✓ {} randomly placed at {}", def.name(), origin));
                    break;
                }
                if line.eq_ignore_ascii_case("help") {
                    self.say(PLACEMENT_HELP);
                    continue;
                }
                let (origin, direction) = match parse_placement(&line) {
                    Ok(p) => p,
                    Err(e) => {
                        self.say(&format!("✗ Error: {}", e));
                        continue;
                    }
                };
                match board.place(i, origin, direction) {
                    Ok(()) => {
                        self.say(&format!("✓ {} placed at {}", def.name(), origin));
                        break;
                    }
                    Err(e) => {
                        self.say(&format!("✗ Error: {}", e));
                        self.say("   Hint: the ship must fit on the board and not overlap another.");
                    }
                }
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> TurnSource for CliPlayer<R, W> {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        board.reset();
        if self.auto_place {
            board.place_all_random(rng)?;
            return Ok(());
        }
        loop {
            let answer = self
                .ask("Choose manual or automatic grid initialization (m, a)")?
                .ok_or_else(|| anyhow!("input closed during ship placement"))?;
            match PlacementMode::from_answer(&answer) {
                Some(PlacementMode::Automatic) => {
                    board.place_all_random(rng)?;
                    return Ok(());
                }
                Some(PlacementMode::Manual) => return self.place_manually(rng, board),
                None => continue,
            }
        }
    }

    fn select_target(&mut self, _rng: &mut SmallRng, target: &Grid) -> anyhow::Result<TurnAction> {
        loop {
            let Some(line) = self.ask("Insert coordinates")? else {
                return Ok(TurnAction::Menu);
            };
            if line.eq_ignore_ascii_case(MENU_TOKEN) {
                return Ok(TurnAction::Menu);
            }
            if line.eq_ignore_ascii_case("help") {
                self.say(TARGETING_HELP);
                continue;
            }
            match Coordinate::parse(&line) {
                Ok(coord) if target.at(coord).is_fired() => {
                    self.say(&format!("✗ You already fired at {}! Choose another target.", coord));
                }
                Ok(coord) => return Ok(TurnAction::Fire(coord)),
                Err(e) => {
                    self.say(&format!("✗ Invalid coordinate: {}", e));
                    self.say("   Example: A5, B10, j1");
                }
            }
        }
    }

    fn choose_menu(&mut self) -> anyhow::Result<MenuChoice> {
        loop {
            self.say(ui::menu());
            let Some(line) = self.ask("select function")? else {
                return Ok(MenuChoice::Quit);
            };
            if let Some(choice) = line.parse::<u32>().ok().and_then(MenuChoice::from_number) {
                return Ok(choice);
            }
        }
    }

    fn acknowledge(&mut self) -> anyhow::Result<()> {
        self.ask("return to main menu (press ENTER)")?;
        Ok(())
    }

    fn handle_shot_result(&mut self, coord: Coordinate, result: ShotResult) {
        let msg = match result {
            ShotResult::Hit(_) => format!("🎯 HIT! Your shot at {} struck an enemy ship!", coord),
            ShotResult::Sunk(kind) => format!("💥 SUNK! You destroyed the enemy's {}!", kind),
            ShotResult::AlreadyHit => format!("Your shot at {} landed on wreckage.", coord),
            ShotResult::Miss => format!("💧 Miss. Your shot at {} hit only water.", coord),
        };
        self.say(&msg);
    }

    fn handle_opponent_shot(&mut self, coord: Coordinate, result: ShotResult) {
        let msg = match result {
            ShotResult::Hit(kind) => format!("⚠️  ENEMY HIT! They struck your {} at {}", kind, coord),
            ShotResult::Sunk(kind) => format!("💀 SHIP LOST! Enemy destroyed your {} at {}", kind, coord),
            ShotResult::AlreadyHit => format!("Enemy fired at wreckage at {}", coord),
            ShotResult::Miss => format!("✓ Enemy missed at {}", coord),
        };
        self.say(&msg);
    }
}

const PLACEMENT_HELP: &str = "
    Format: <COLUMN><ROW><DIRECTION>

    Examples:
      a1r   - start at A1, extend right
      c5d   - start at C5, extend down
      J10 u - start at J10, extend up

    Valid columns: A-J, valid rows: 1-10
    Directions: l = left, r = right, u = up, d = down
    Press ENTER without input to place the current ship at random.";

const TARGETING_HELP: &str = "
    Format: <COLUMN><ROW>, e.g. A5, b10, J1

    Board symbols:
      X = hit   o = miss   . = unknown

    Type 'menu' to open the menu.";
