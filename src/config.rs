//! Board and fleet constants.

use crate::common::BoardError;
use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5, 'c'),
    ShipType::new("Battleship", 4, 'b'),
    ShipType::new("Cruiser", 3, 'r'),
    ShipType::new("Submarine", 3, 's'),
    ShipType::new("Destroyer", 2, 'd'),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Length of the longest ship in the fleet.
pub const MAX_SHIP_LENGTH: usize = 5;

/// Random origins tried per ship before falling back to a board scan.
pub const MAX_RANDOM_PLACEMENT_ATTEMPTS: usize = 1000;

/// Random shots sampled in search mode before enumerating untried cells.
pub const MAX_RANDOM_SHOT_ATTEMPTS: usize = 200;

/// Check that the fleet constants agree with each other and fit the board.
pub fn validate_fleet() -> Result<(), BoardError> {
    let total: usize = SHIPS.iter().map(|s| s.length()).sum();
    if total != TOTAL_SHIP_CELLS {
        return Err(BoardError::InvalidFleet("ship lengths do not sum to TOTAL_SHIP_CELLS"));
    }
    let longest = SHIPS.iter().map(|s| s.length()).max().unwrap_or(0);
    if longest != MAX_SHIP_LENGTH {
        return Err(BoardError::InvalidFleet("MAX_SHIP_LENGTH does not match the fleet"));
    }
    if longest > BOARD_SIZE as usize || longest == 0 {
        return Err(BoardError::InvalidFleet("a ship does not fit on the board"));
    }
    if TOTAL_SHIP_CELLS > BOARD_SIZE as usize * BOARD_SIZE as usize {
        return Err(BoardError::InvalidFleet("fleet is larger than the board"));
    }
    for (i, a) in SHIPS.iter().enumerate() {
        if SHIPS[i + 1..].iter().any(|b| b.marker() == a.marker()) {
            return Err(BoardError::InvalidFleet("ship markers must be distinct"));
        }
    }
    Ok(())
}

