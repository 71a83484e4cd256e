//! A player's ocean grid: fleet placement and incoming shots.

use core::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::common::{BoardError, ShotResult};
use crate::config::{MAX_RANDOM_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::coord::{Coordinate, Direction};
use crate::grid::{Cell, Grid};
use crate::ship::{Ship, ShipKind};

/// Ocean grid plus the ships laid out on it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ocean: Grid,
    ships: [Option<Ship>; NUM_SHIPS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            ocean: Grid::new(),
            ships: [None; NUM_SHIPS],
        }
    }

    /// Remove every ship and shot mark.
    pub fn reset(&mut self) {
        self.ocean.reset();
        self.ships = [None; NUM_SHIPS];
    }

    pub fn ocean(&self) -> &Grid {
        &self.ocean
    }

    /// Placed ships, indexed like [`SHIPS`].
    pub fn ships(&self) -> &[Option<Ship>; NUM_SHIPS] {
        &self.ships
    }

    /// Returns `true` once every ship of the fleet is on the board.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Returns `true` when no intact ship segment is left.
    pub fn all_sunk(&self) -> bool {
        self.all_placed() && self.ocean.ship_cells() == 0
    }

    /// Place ship `ship_index` at `origin` extending towards `direction`.
    ///
    /// All-or-nothing: on any error the board is left untouched.
    pub fn place(
        &mut self,
        ship_index: usize,
        origin: Coordinate,
        direction: Direction,
    ) -> Result<(), BoardError> {
        let kind = ShipKind::new(ship_index).ok_or(BoardError::InvalidIndex)?;
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = self.check_placement(kind, origin, direction)?;
        for cell in ship.footprint().iter() {
            self.ocean.put(cell, Cell::Ship(kind));
        }
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random non-overlapping origin and direction for `ship_index`.
    ///
    /// Samples uniformly a bounded number of times, then falls back to the
    /// first free slot in row-major order.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(Coordinate, Direction), BoardError> {
        let kind = ShipKind::new(ship_index).ok_or(BoardError::InvalidIndex)?;
        for _ in 0..MAX_RANDOM_PLACEMENT_ATTEMPTS {
            let origin = Coordinate::random(rng);
            let direction: Direction = rng.random();
            if self.check_placement(kind, origin, direction).is_ok() {
                return Ok((origin, direction));
            }
        }
        warn!(
            "random placement of {} gave up after {} attempts, scanning the board",
            kind, MAX_RANDOM_PLACEMENT_ATTEMPTS
        );
        Coordinate::all()
            .flat_map(|origin| Direction::ALL.into_iter().map(move |d| (origin, d)))
            .find(|&(origin, d)| self.check_placement(kind, origin, d).is_ok())
            .ok_or(BoardError::UnableToPlaceShip)
    }

    /// Clear the board and lay out the whole fleet at random.
    pub fn place_all_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.reset();
        for i in 0..NUM_SHIPS {
            let (origin, direction) = self.random_placement(rng, i)?;
            self.place(i, origin, direction)?;
            debug!("placed {} at {} towards {:?}", SHIPS[i].name(), origin, direction);
        }
        Ok(())
    }

    /// Resolve an incoming shot, marking the ocean grid.
    pub fn receive_shot(&mut self, coord: Coordinate) -> ShotResult {
        match self.ocean.at(coord) {
            Cell::Ship(kind) => {
                self.ocean.put(coord, Cell::Hit);
                if self.is_sunk(kind) {
                    ShotResult::Sunk(kind)
                } else {
                    ShotResult::Hit(kind)
                }
            }
            Cell::Hit => ShotResult::AlreadyHit,
            Cell::Empty | Cell::Miss => {
                self.ocean.put(coord, Cell::Miss);
                ShotResult::Miss
            }
        }
    }

    /// Returns `true` when every segment of `kind` has been hit.
    pub fn is_sunk(&self, kind: ShipKind) -> bool {
        match &self.ships[kind.index()] {
            Some(ship) => ship.footprint().iter().all(|c| self.ocean.at(c) == Cell::Hit),
            None => false,
        }
    }

    fn check_placement(
        &self,
        kind: ShipKind,
        origin: Coordinate,
        direction: Direction,
    ) -> Result<Ship, BoardError> {
        let ship = Ship::new(kind, origin, direction)?;
        if ship.footprint().iter().any(|c| self.ocean.at(c) != Cell::Empty) {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(ship)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{\n  ocean: {:?},\n  ships: {:?}\n}}", self.ocean, self.ships)
    }
}
