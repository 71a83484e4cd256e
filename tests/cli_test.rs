use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    parse_placement, Board, Cell, CliPlayer, Coordinate, Direction, Grid, MenuChoice,
    PlacementMode, TurnAction, TurnSource,
};

fn at(s: &str) -> Coordinate {
    Coordinate::parse(s).unwrap()
}

fn player(script: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

#[test]
fn placement_text_forms() {
    assert_eq!(parse_placement("a1r"), Ok((at("a1"), Direction::Right)));
    assert_eq!(parse_placement("C5 d"), Ok((at("c5"), Direction::Down)));
    assert_eq!(parse_placement(" j10U "), Ok((at("j10"), Direction::Up)));
    assert!(parse_placement("").is_err());
    assert!(parse_placement("a1x").is_err());
    assert!(parse_placement("z1r").is_err());
    assert!(parse_placement("r").is_err());
}

#[test]
fn manual_placement_retries_until_valid() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    // carrier, a bad token, an overlap, then the rest; destroyer goes random.
    let mut cli = player("m\na1r\nhelp\nq9\nc1d\na2r\na3r\na4r\n\n");
    cli.place_ships(&mut rng, &mut board).unwrap();

    assert!(board.all_placed());
    let carrier = board.ships()[0].unwrap();
    assert_eq!(carrier.origin(), at("a1"));
    assert_eq!(carrier.direction(), Direction::Right);
    assert_eq!(board.ships()[1].unwrap().origin(), at("a2"));
    assert_eq!(board.ocean().ship_cells(), seabattle::TOTAL_SHIP_CELLS);

    let out = String::from_utf8(cli.into_output()).unwrap();
    assert!(out.contains("overlaps"));
    assert!(out.contains("Format: <COLUMN><ROW><DIRECTION>"));
    assert!(out.contains("randomly placed"));
}

#[test]
fn automatic_placement() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut board = Board::new();
    let mut cli = player("x\nA\n");
    cli.place_ships(&mut rng, &mut board).unwrap();
    assert!(board.all_placed());
}

#[test]
fn placement_mode_answers() {
    assert_eq!(PlacementMode::from_answer("M"), Some(PlacementMode::Manual));
    assert_eq!(PlacementMode::from_answer(" a "), Some(PlacementMode::Automatic));
    assert_eq!(PlacementMode::from_answer("auto"), None);
}

#[test]
fn auto_place_flag_skips_question() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new();
    let mut cli = player("").with_auto_place(true);
    cli.place_ships(&mut rng, &mut board).unwrap();
    assert!(board.all_placed());
}

#[test]
fn placement_fails_when_input_closes() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut board = Board::new();
    assert!(player("m\na1r\n").place_ships(&mut rng, &mut board).is_err());
}

#[test]
fn targeting_skips_invalid_and_fired_cells() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut target = Grid::new();
    target.put(at("a1"), Cell::Hit);
    target.put(at("b1"), Cell::Miss);
    let mut cli = player("k5\na1\nb1\nhelp\nC1\n");
    assert_eq!(
        cli.select_target(&mut rng, &target).unwrap(),
        TurnAction::Fire(at("c1"))
    );
    let out = String::from_utf8(cli.into_output()).unwrap();
    assert!(out.contains("Invalid coordinate"));
    assert!(out.contains("already fired at a1"));
    assert!(out.contains("already fired at b1"));
}

#[test]
fn menu_token_and_end_of_input_open_menu() {
    let mut rng = SmallRng::seed_from_u64(6);
    let target = Grid::new();
    let mut cli = player("MENU\n");
    assert_eq!(cli.select_target(&mut rng, &target).unwrap(), TurnAction::Menu);
    assert_eq!(cli.select_target(&mut rng, &target).unwrap(), TurnAction::Menu);
}

#[test]
fn menu_choice_ignores_bad_numbers() {
    let mut cli = player("0\nseven\n6\n4\n");
    assert_eq!(cli.choose_menu().unwrap(), MenuChoice::Reset);
    assert_eq!(cli.choose_menu().unwrap(), MenuChoice::Quit);
    assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Statistics));
    assert_eq!(MenuChoice::from_number(3), Some(MenuChoice::Resume));
}
