// Hunt/search targeting for the scripted opponent.
// Pure state transitions over the opponent's own target grid; no heap use.

use log::debug;
use rand::Rng;

use crate::{
    common::BoardError,
    config::MAX_RANDOM_SHOT_ATTEMPTS,
    coord::{Coordinate, Direction},
    grid::{Cell, Grid},
};

/// Direction every hunt starts probing in.
pub const INITIAL_DIRECTION: Direction = Direction::Left;

/// Bookkeeping for a hunt around a located ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hunt {
    /// First hit on the current target.
    pub origin: Coordinate,
    /// Cell the next probe steps away from.
    pub last: Coordinate,
    pub direction: Direction,
    pub hits: u32,
    pub misses: u32,
    /// Direction changes since the hunt began.
    pub reversals: u32,
}

impl Hunt {
    /// Begin hunting around a fresh hit.
    pub fn start(origin: Coordinate) -> Self {
        Hunt {
            origin,
            last: origin,
            direction: INITIAL_DIRECTION,
            hits: 1,
            misses: 0,
            reversals: 0,
        }
    }

    /// More than one hit means the ship's axis is known.
    pub fn has_main_direction(&self) -> bool {
        self.hits > 1
    }

    /// Heuristic "ship is finished" test: needs more than one hit, more than
    /// one miss and at least one direction change.
    pub fn is_over(&self) -> bool {
        self.hits > 1 && self.misses > 1 && self.reversals > 0
    }

    /// Only the origin is known and all four sides are blocked.
    pub fn is_exhausted(&self) -> bool {
        !self.has_main_direction() && self.reversals >= Direction::ALL.len() as u32
    }

    /// Pick the next probe direction: the opposite end once the axis is
    /// known, otherwise the next compass direction in the cycle.
    pub fn turn(&mut self) {
        self.reversals += 1;
        self.direction = if self.has_main_direction() {
            self.direction.opposite()
        } else {
            self.direction.next()
        };
    }

    /// Account for a real or implied miss and restart from the origin.
    pub fn register_miss(&mut self) {
        self.misses += 1;
        self.turn();
        self.last = self.origin;
    }

    /// Account for a hit at `coord` on the current line.
    pub fn register_hit(&mut self, coord: Coordinate) {
        self.hits += 1;
        self.last = coord;
    }
}

/// Targeting mode of the scripted opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HuntState {
    /// Uniformly random shots at untried cells.
    #[default]
    Search,
    /// Probing outward from a known hit.
    Hunt(Hunt),
}

impl HuntState {
    pub fn is_hunting(&self) -> bool {
        matches!(self, HuntState::Hunt(_))
    }

    /// Choose this turn's shot against `target`, the opponent's own record of
    /// shots fired. Returns the state to carry into [`HuntState::observe`].
    ///
    /// Always yields a cell that `target` marks `Empty`.
    pub fn next_shot<R: Rng + ?Sized>(
        self,
        target: &Grid,
        rng: &mut R,
    ) -> Result<(HuntState, Coordinate), BoardError> {
        let mut hunt = match self {
            HuntState::Search => return Ok((HuntState::Search, random_shot(target, rng)?)),
            HuntState::Hunt(hunt) => hunt,
        };
        loop {
            let probe = hunt.last.step(hunt.direction);
            match probe.map(|c| (c, target.at(c))) {
                Some((coord, Cell::Empty)) => return Ok((HuntState::Hunt(hunt), coord)),
                Some((coord, Cell::Hit)) => hunt.register_hit(coord),
                // Off the grid or already missed: treat as a miss without firing.
                _ => {
                    hunt.register_miss();
                    if hunt.is_over() || hunt.is_exhausted() {
                        debug!("hunt around {} abandoned: {:?}", hunt.origin, hunt);
                        return Ok((HuntState::Search, random_shot(target, rng)?));
                    }
                }
            }
        }
    }

    /// Transition on the outcome of the shot fired at `coord`.
    pub fn observe(self, coord: Coordinate, hit: bool) -> HuntState {
        match (self, hit) {
            (HuntState::Search, true) => {
                debug!("hit at {}, entering hunt mode", coord);
                HuntState::Hunt(Hunt::start(coord))
            }
            (HuntState::Search, false) => HuntState::Search,
            (HuntState::Hunt(mut hunt), true) => {
                hunt.register_hit(coord);
                HuntState::Hunt(hunt)
            }
            (HuntState::Hunt(mut hunt), false) => {
                hunt.register_miss();
                if hunt.is_over() {
                    debug!("hunt around {} finished: {:?}", hunt.origin, hunt);
                    HuntState::Search
                } else {
                    HuntState::Hunt(hunt)
                }
            }
        }
    }
}

/// Uniformly random cell that `target` has not recorded a shot at.
///
/// Rejection-samples a bounded number of times, then picks uniformly among
/// the remaining untried cells.
pub fn random_shot<R: Rng + ?Sized>(target: &Grid, rng: &mut R) -> Result<Coordinate, BoardError> {
    for _ in 0..MAX_RANDOM_SHOT_ATTEMPTS {
        let coord = Coordinate::random(rng);
        if target.at(coord) == Cell::Empty {
            return Ok(coord);
        }
    }
    let untried = target.count(|c| c == Cell::Empty);
    if untried == 0 {
        return Err(BoardError::NoUntriedCells);
    }
    let pick = rng.random_range(0..untried);
    Coordinate::all()
        .filter(|&c| target.at(c) == Cell::Empty)
        .nth(pick)
        .ok_or(BoardError::NoUntriedCells)
}
