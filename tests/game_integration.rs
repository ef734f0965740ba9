use shakmaty::Color::{Black, White};
use tabula::{Game, MoveError, MoveScript, Position};

/// Helper: new game with the four opening moves already played.
fn after_opening() -> Game {
    let mut game = Game::new();
    MoveScript::parse("e4 e5 b4 h6")
        .expect("valid script")
        .play(&mut game)
        .expect("opening moves are legal");
    game
}

/// Helper: assert no two pieces share a square.
fn assert_no_overlap(game: &Game) {
    assert_eq!(
        game.occupied().count(),
        game.all_pieces().count(),
        "two pieces share a square:\n{}",
        game.state()
    );
}

/// Helper: assert a move is rejected and nothing changes.
fn assert_rejected(game: &mut Game, desired: &str) -> MoveError {
    let before = game.clone();
    let err = game
        .make_move(desired)
        .expect_err("move should be rejected");
    assert_eq!(*game, before, "rejected move {desired} changed the game");
    err
}

// ---------------------------------------------------------------
// Starting position
// ---------------------------------------------------------------

#[test]
fn new_game_white_to_move() {
    let game = Game::new();

    assert_eq!(game.turn(), White);
    assert_eq!(game.active_player(), game.white());
    assert!(game.all_pieces().count() > 8);
    assert_eq!(game.state().len(), 169);
}

// ---------------------------------------------------------------
// Legal pawn moves alternate the turn
// ---------------------------------------------------------------

#[test]
fn pawn_moves_alternate_turn() {
    let mut game = Game::new();

    game.make_move("e4").expect("e4 is legal");
    assert_eq!(game.turn(), Black);

    game.make_move("e5").expect("e5 is legal");
    assert_eq!(game.turn(), White);

    game.make_move("b4").expect("b4 is legal");
    assert_eq!(game.turn(), Black);

    game.make_move("h6").expect("h6 is legal");
    assert_eq!(game.turn(), White);

    let at = |s: &str| s.parse::<Position>().expect("valid square");
    assert!(game.piece_at(at("e4")).is_some());
    assert!(game.piece_at(at("e2")).is_none());
    assert!(game.piece_at(at("e5")).is_some());
    assert!(game.piece_at(at("h6")).is_some());
    assert_no_overlap(&game);
}

// ---------------------------------------------------------------
// Illegal moves leave the game untouched
// ---------------------------------------------------------------

#[test]
fn cannot_capture_vertically() {
    let mut game = after_opening();

    let err = assert_rejected(&mut game, "e5");

    assert_eq!(err, MoveError::VerticalCapture);
    assert_eq!(game.turn(), White);
}

#[test]
fn cannot_move_two_after_first_move() {
    let mut game = after_opening();

    assert_rejected(&mut game, "b6");
    assert_eq!(game.turn(), White);
}

#[test]
fn cannot_move_three_initially() {
    let mut game = Game::new();

    assert_rejected(&mut game, "a5");
    assert_eq!(game.turn(), White);
}

#[test]
fn all_rejections_in_sequence() {
    let mut game = after_opening();

    assert_rejected(&mut game, "e5");
    assert_rejected(&mut game, "b6");
    assert_rejected(&mut game, "a5");
    assert_eq!(game.turn(), White);

    // A legal move still goes through afterwards.
    game.make_move("b5").expect("b5 is legal");
    assert_eq!(game.turn(), Black);
}

// ---------------------------------------------------------------
// Invariants over a longer game
// ---------------------------------------------------------------

#[test]
fn turn_and_occupancy_invariants_hold() {
    let mut game = Game::new();
    let moves = [
        "a4", "a5", "b3", "b6", "c4", "c5", "d3", "d6", "e4", "e5", "f3", "f6", "g4", "g5",
        "h3", "h6", "a5", "a4", "h4", "h5",
    ];

    let mut expected_turn = White;
    for desired in moves {
        if game.make_move(desired).is_ok() {
            expected_turn = expected_turn.other();
        }
        assert_eq!(game.turn(), expected_turn, "after {desired}");
        assert_no_overlap(&game);
    }
}

#[test]
fn state_marks_moved_pawns() {
    let game = after_opening();
    let expected = "\
8| | | | | | | | |
7|p|p|p|p| |p|p| |
6| | | | | | | |p|
5| | | | |p| | | |
4| |p| | |p| | | |
3| | | | | | | | |
2|p| |p|p| |p|p|p|
1| | | | | | | | |
  a b c d e f g h";

    assert_eq!(game.state(), expected);
}
