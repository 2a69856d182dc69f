//! Fairy pieces, custom piece sets and deck games.

use std::sync::Arc;

use crate::board::{catalog, Color, Deck, Game, Move, PieceSet, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn fairy_game(fen: &str) -> Game {
    let set = Arc::new(PieceSet::new(catalog::all()).unwrap());
    Game::from_fen_with(set, fen).unwrap()
}

fn targets_from(game: &Game, from: &str) -> Vec<String> {
    let from = sq(from);
    let mut targets: Vec<String> = game
        .legal_moves()
        .iter()
        .filter(|m| m.from == from)
        .map(|m| m.to.to_string())
        .collect();
    targets.sort();
    targets
}

#[test]
fn test_frog_leaps_onto_empty_squares_only() {
    let game = fairy_game("4k3/8/5r2/8/3F4/8/8/4K3 w - - 0 1");
    assert_eq!(
        targets_from(&game, "d4"),
        ["b2", "b4", "b6", "d2", "d6", "f2", "f4"]
    );
}

#[test]
fn test_frog_is_never_a_target() {
    let game = fairy_game("3rk3/8/8/8/3F4/8/8/4K3 b - - 0 1");
    assert_eq!(targets_from(&game, "d8"), ["a8", "b8", "c8", "d5", "d6", "d7"]);
    assert!(game.legal_moves().iter().all(|m| m.to != sq("d4")));
}

#[test]
fn test_frog_gives_no_check() {
    let game = fairy_game("8/8/8/4k3/8/4F3/8/4K3 b - - 0 1");
    assert!(!game.is_in_check());
    assert!(!game.is_square_attacked(sq("e5"), Color::White));
}

#[test]
fn test_ghost_leaps_over_pieces() {
    let game = fairy_game("4k3/8/8/8/8/8/P7/G3K3 w - - 0 1");
    assert_eq!(targets_from(&game, "a1"), ["a3", "b1", "c1"]);
}

#[test]
fn test_ghost_check_cannot_be_blocked() {
    let game = fairy_game("4k3/8/8/8/8/4g3/8/4K2R w - - 0 1");
    assert!(game.is_in_check());
    // a leaper cannot be blocked, and the rook cannot reach e3
    assert!(game.legal_moves().iter().all(|m| m.from == sq("e1")));
}

#[test]
fn test_pinned_ghost_cannot_leap_over_own_king() {
    let game = fairy_game("k3r3/8/8/8/8/4G3/4K3/8 w - - 0 1");
    assert_eq!(targets_from(&game, "e3"), ["e4", "e5"]);
}

#[test]
fn test_pinned_ghost_cannot_leap_over_pinner() {
    let game = fairy_game("k7/4r3/4G3/8/8/8/4K3/8 w - - 0 1");
    assert_eq!(targets_from(&game, "e6"), ["e4", "e5", "e7"]);
}

#[test]
fn test_pinned_frog_stays_between_king_and_pinner() {
    let game = fairy_game("k3r3/8/8/8/8/4F3/4K3/8 w - - 0 1");
    assert_eq!(targets_from(&game, "e3"), ["e5"]);

    let mut game = game;
    for mv in game.legal_moves() {
        game.push(mv);
        let king = game.board().king_square(Color::White, game.piece_set()).unwrap();
        assert!(!game.is_square_attacked(king, Color::Black), "{mv:?}");
        game.pop();
    }
}

#[test]
fn test_walls_stay_put_but_castle() {
    let mut game = fairy_game("4k3/8/8/8/8/8/8/W3K2W w KQ - 0 1");
    assert!(targets_from(&game, "a1").is_empty());
    assert!(targets_from(&game, "h1").is_empty());
    assert_eq!(
        targets_from(&game, "e1"),
        ["c1", "d1", "d2", "e2", "f1", "f2", "g1"]
    );
    game.play("e1c1").unwrap();
    assert_eq!(game.symbol_at(sq("d1")), Some('W'));
    assert_eq!(game.symbol_at(sq("c1")), Some('K'));
    assert_eq!(game.symbol_at(sq("a1")), None);
}

#[test]
fn test_chancellor_castles_and_checks_like_knight() {
    let mut game = fairy_game("4k3/8/8/8/8/8/8/4K2C w K - 0 1");
    game.play("e1g1").unwrap();
    assert_eq!(game.symbol_at(sq("f1")), Some('C'));

    let game = fairy_game("4k3/8/3C4/8/8/8/8/4K3 b - - 0 1");
    assert!(game.is_in_check());
}

#[test]
fn test_custom_promotion_list() {
    let set = PieceSet::new(catalog::all())
        .unwrap()
        .with_promotions(Color::White, &["Frog"])
        .unwrap();
    let frog = set.id("Frog").unwrap();
    let mut game = Game::from_fen_with(Arc::new(set), "4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let promos: Vec<Move> = game
        .legal_moves()
        .iter()
        .copied()
        .filter(|m| m.from == sq("a7"))
        .collect();
    assert_eq!(promos, [Move::with_promotion(sq("a7"), sq("a8"), frog)]);
    game.play("a7a8f").unwrap();
    assert!(game.board().invincible().contains(sq("a8")));
}

#[test]
fn test_empty_promotion_list_keeps_pawn() {
    let set = PieceSet::standard().with_promotions(Color::White, &[]).unwrap();
    let mut game = Game::from_fen_with(Arc::new(set), "4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    game.play("a7a8").unwrap();
    assert_eq!(game.symbol_at(sq("a8")), Some('P'));
}

#[test]
fn test_deck_game_opening_moves() {
    let white: Deck = "GNBAKCFW".parse().unwrap();
    let mut game = Game::from_decks(&white, &Deck::standard()).unwrap();
    assert_eq!(targets_from(&game, "a1"), ["a3"]);
    assert_eq!(targets_from(&game, "d1"), ["c3", "e3"]);
    assert_eq!(targets_from(&game, "f1"), ["e3", "g3"]);
    assert_eq!(targets_from(&game, "g1"), ["e3", "g3"]);
    assert_eq!(game.perft(1), 25);
    assert_eq!(game.perft(2), 25 * 20);
}
