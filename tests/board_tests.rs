use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    validate_fleet, Board, BoardError, Cell, Coordinate, Direction, Footprint, Grid, ShipKind,
    ShotResult, SHIPS, TOTAL_SHIP_CELLS,
};

fn at(s: &str) -> Coordinate {
    Coordinate::parse(s).unwrap()
}

#[test]
fn fleet_constants_are_consistent() {
    assert!(validate_fleet().is_ok());
    assert_eq!(SHIPS.iter().map(|s| s.length()).sum::<usize>(), TOTAL_SHIP_CELLS);
}

#[test]
fn carrier_placed_right_from_a1() {
    let mut board = Board::new();
    board.place(0, at("a1"), Direction::Right).unwrap();
    let carrier = ShipKind::new(0).unwrap();
    for s in ["a1", "b1", "c1", "d1", "e1"] {
        assert_eq!(board.ocean().at(at(s)), Cell::Ship(carrier), "{}", s);
    }
    assert_eq!(board.ocean().at(at("f1")), Cell::Empty);
    assert_eq!(board.ocean().ship_cells(), 5);
}

#[test]
fn overlapping_placement_leaves_board_untouched() {
    let mut board = Board::new();
    board.place(0, at("a1"), Direction::Right).unwrap();
    let before = board;
    assert_eq!(
        board.place(1, at("c1"), Direction::Down),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(board, before);
}

#[test]
fn out_of_bounds_placement_leaves_board_untouched() {
    let mut board = Board::new();
    let before = board;
    assert_eq!(
        board.place(0, at("h1"), Direction::Right),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place(4, at("a1"), Direction::Up),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(board, before);
}

#[test]
fn place_rejects_bad_index_and_duplicates() {
    let mut board = Board::new();
    assert_eq!(
        board.place(5, at("a1"), Direction::Right),
        Err(BoardError::InvalidIndex)
    );
    board.place(4, at("a1"), Direction::Down).unwrap();
    assert_eq!(
        board.place(4, at("e5"), Direction::Down),
        Err(BoardError::ShipAlreadyPlaced)
    );
}

#[test]
fn footprint_steps_towards_direction() {
    let fp = Footprint::new(at("e5"), Direction::Up, 3).unwrap();
    let cells: Vec<_> = fp.iter().collect();
    assert_eq!(cells, vec![at("e5"), at("e4"), at("e3")]);
    assert!(fp.contains(at("e4")));
    assert_eq!(fp.len(), 3);
    assert!(!fp.is_empty());
    assert_eq!(
        Footprint::new(at("b2"), Direction::Left, 3),
        Err(BoardError::ShipOutOfBounds)
    );
}

#[test]
fn random_fleet_covers_seventeen_cells() {
    let mut rng = SmallRng::seed_from_u64(12345);
    let mut board = Board::new();
    board.place_all_random(&mut rng).unwrap();
    assert!(board.all_placed());
    assert_eq!(board.ocean().ship_cells(), TOTAL_SHIP_CELLS);
}

#[test]
fn random_placement_is_deterministic_per_seed() {
    let mut a = Board::new();
    let mut b = Board::new();
    a.place_all_random(&mut SmallRng::seed_from_u64(9)).unwrap();
    b.place_all_random(&mut SmallRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shots_report_hit_sunk_miss_and_repeat() {
    let mut board = Board::new();
    board.place(4, at("a1"), Direction::Right).unwrap();
    let destroyer = ShipKind::new(4).unwrap();

    assert_eq!(board.receive_shot(at("a1")), ShotResult::Hit(destroyer));
    assert_eq!(board.receive_shot(at("a1")), ShotResult::AlreadyHit);
    assert!(!board.is_sunk(destroyer));
    assert_eq!(board.receive_shot(at("b1")), ShotResult::Sunk(destroyer));
    assert!(board.is_sunk(destroyer));

    assert_eq!(board.receive_shot(at("j10")), ShotResult::Miss);
    assert_eq!(board.ocean().at(at("j10")), Cell::Miss);
    assert_eq!(board.receive_shot(at("j10")), ShotResult::Miss);
}

#[test]
fn reset_clears_ships_and_marks() {
    let mut board = Board::new();
    board.place_all_random(&mut SmallRng::seed_from_u64(3)).unwrap();
    board.receive_shot(at("c3"));
    board.reset();
    assert_eq!(board, Board::new());
}

#[test]
fn grid_access_is_bounds_checked() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(0, 9), Ok(Cell::Empty));
    assert_eq!(
        grid.get(10, 0),
        Err(BoardError::IndexOutOfBounds { row: 10, col: 0 })
    );
    assert!(grid.set(3, 4, Cell::Miss).is_ok());
    assert_eq!(grid.at(at("e4")), Cell::Miss);
    assert!(grid.set(0, 10, Cell::Hit).is_err());
}
