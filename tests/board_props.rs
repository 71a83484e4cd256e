use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, Cell, Coordinate, CoordinateError, Direction, ShipKind, NUM_SHIPS, SHIPS,
    TOTAL_SHIP_CELLS,
};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Random fleets never overlap and cover exactly the fleet's cells.
    #[test]
    fn random_fleet_has_no_overlap(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_all_random(&mut rng).unwrap();

        let mut seen = HashSet::new();
        for (i, ship) in board.ships().iter().enumerate() {
            let ship = ship.unwrap();
            prop_assert_eq!(ship.footprint().len(), SHIPS[i].length());
            for c in ship.footprint().iter() {
                prop_assert!(seen.insert(c), "cell {} used twice", c);
                prop_assert_eq!(board.ocean().at(c), Cell::Ship(ShipKind::new(i).unwrap()));
            }
        }
        prop_assert_eq!(seen.len(), TOTAL_SHIP_CELLS);
        prop_assert_eq!(board.ocean().ship_cells(), TOTAL_SHIP_CELLS);
    }

    /// A placement either lands fully or changes nothing.
    #[test]
    fn placement_is_all_or_nothing(
        seed in any::<u64>(),
        row in 0..10usize,
        col in 0..10usize,
        dir in direction_strategy(),
        ship_index in 0..NUM_SHIPS,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        // Lay out a partial fleet of the other ships first.
        for i in (0..NUM_SHIPS).filter(|&i| i != ship_index && i % 2 == 0) {
            let (o, d) = board.random_placement(&mut rng, i).unwrap();
            board.place(i, o, d).unwrap();
        }
        let before = board;
        let origin = Coordinate::new(row, col).unwrap();
        match board.place(ship_index, origin, dir) {
            Ok(()) => {
                let added = board.ocean().ship_cells() - before.ocean().ship_cells();
                prop_assert_eq!(added, SHIPS[ship_index].length());
                prop_assert_eq!(board.ships()[ship_index].unwrap().origin(), origin);
            }
            Err(_) => {
                prop_assert_eq!(board, before);
            }
        }
    }

    /// Formatting then parsing any on-grid cell gives the same cell back.
    #[test]
    fn coordinate_text_round_trips(row in 0..10usize, col in 0..10usize) {
        let c = Coordinate::new(row, col).unwrap();
        prop_assert_eq!(Coordinate::parse(&c.to_string()), Ok(c));
        prop_assert_eq!(Coordinate::parse(&c.to_string().to_uppercase()), Ok(c));
    }

    /// Parsing never panics on arbitrary short input.
    #[test]
    fn parse_arbitrary_input(s in "\\PC{0,4}") {
        if let Ok(c) = Coordinate::parse(&s) {
            prop_assert!(c.row() < 10 && c.col() < 10);
        }
    }
}

#[test]
fn parse_examples() {
    assert_eq!(Coordinate::parse("j10"), Ok(Coordinate::new(9, 9).unwrap()));
    assert_eq!(Coordinate::parse("A1"), Ok(Coordinate::new(0, 0).unwrap()));
    assert_eq!(Coordinate::parse("c5"), Ok(Coordinate::new(4, 2).unwrap()));
    assert_eq!("e7".parse::<Coordinate>(), Ok(Coordinate::new(6, 4).unwrap()));
}

#[test]
fn parse_rejects_bad_input() {
    assert_eq!(Coordinate::parse(""), Err(CoordinateError::WrongLength(0)));
    assert_eq!(Coordinate::parse("a"), Err(CoordinateError::WrongLength(1)));
    assert_eq!(Coordinate::parse("a100"), Err(CoordinateError::WrongLength(4)));
    assert_eq!(Coordinate::parse("k1"), Err(CoordinateError::InvalidColumn('k')));
    assert_eq!(Coordinate::parse("11"), Err(CoordinateError::InvalidColumn('1')));
    assert_eq!(Coordinate::parse("a0"), Err(CoordinateError::RowOutOfRange(0)));
    assert_eq!(Coordinate::parse("a11"), Err(CoordinateError::RowOutOfRange(11)));
    assert_eq!(Coordinate::parse("a01"), Err(CoordinateError::InvalidRow));
    assert_eq!(Coordinate::parse("a+1"), Err(CoordinateError::InvalidRow));
    assert_eq!(Coordinate::parse("ab"), Err(CoordinateError::InvalidRow));
}

#[test]
fn format_and_step() {
    let j10 = Coordinate::new(9, 9).unwrap();
    assert_eq!(j10.to_string(), "j10");
    assert_eq!(seabattle::format_coordinate(0, 0).as_deref(), Some("a1"));
    assert_eq!(seabattle::format_coordinate(10, 0), None);
    assert_eq!(j10.step(Direction::Right), None);
    assert_eq!(j10.step(Direction::Down), None);
    assert_eq!(j10.step(Direction::Up), Coordinate::new(8, 9));
    assert_eq!(Coordinate::all().count(), 100);
}

#[test]
fn direction_cycle_and_opposites() {
    let mut d = Direction::Left;
    let mut order = Vec::new();
    for _ in 0..4 {
        order.push(d);
        d = d.next();
    }
    assert_eq!(order, Direction::ALL.to_vec());
    assert_eq!(d, Direction::Left);
    for d in Direction::ALL {
        assert_eq!(d.opposite().opposite(), d);
        assert_ne!(d.opposite(), d);
    }
    assert_eq!(Direction::from_char('U'), Some(Direction::Up));
    assert_eq!(Direction::from_char('x'), None);
}
