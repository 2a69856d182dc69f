//! Edge case tests for special chess positions and moves.

use crate::board::{Color, Game, Move, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn mv(s: &str) -> Move {
    Move::new(sq(&s[0..2]), sq(&s[2..4]))
}

fn sorted(game: &Game) -> Vec<String> {
    let mut moves: Vec<String> = game
        .legal_moves()
        .iter()
        .map(|m| m.display(game.piece_set()).to_string())
        .collect();
    moves.sort();
    moves
}

#[test]
fn test_double_check_from_bishop_and_rook() {
    // Ba5 (through b6 and c7) and Rd1 both hit d8: only the king may move
    let game = Game::from_fen("1b1k4/r6r/5n2/Bn6/8/8/8/K2R4 b - - 0 1").unwrap();
    assert!(game.is_in_check());
    assert_eq!(game.attackers_of(sq("d8"), Color::White).popcount(), 2);
    assert_eq!(sorted(&game), ["d8c8", "d8e7", "d8e8"]);
}

#[test]
fn test_pinned_rook_stays_on_file() {
    let game = Game::from_fen("4k3/4r3/8/8/8/8/4R3/4K3 b - - 0 1").unwrap();
    let moves = game.legal_moves();
    assert_eq!(moves.len(), 9);
    for m in moves.iter().filter(|m| m.from == sq("e7")) {
        assert_eq!(m.to.file(), 4, "{m:?}");
    }
    assert!(moves.contains(&mv("e7e2")));
}

#[test]
fn test_pinned_bishop_moves_along_pin_line() {
    let game = Game::from_fen("4k3/8/2b5/8/Q7/8/8/4K3 b - - 0 1").unwrap();
    let mut bishop: Vec<String> = game
        .legal_moves()
        .iter()
        .filter(|m| m.from == sq("c6"))
        .map(|m| m.to.to_string())
        .collect();
    bishop.sort();
    assert_eq!(bishop, ["a4", "b5", "d7"]);
}

#[test]
fn test_pinned_knight_cannot_move() {
    let game = Game::from_fen("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1").unwrap();
    assert!(game.legal_moves().iter().all(|m| m.from != sq("d2")));
}

#[test]
fn test_en_passant_rank_skewer() {
    // capturing would empty the fifth rank between the king and the rook
    let game = Game::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 2").unwrap();
    assert_eq!(sorted(&game), ["a5a4", "a5a6", "a5b6", "b5b6"]);
}

#[test]
fn test_en_passant_captures_checking_pawn() {
    let game = Game::from_fen("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1").unwrap();
    assert!(game.is_in_check());
    let moves = game.legal_moves();
    assert!(moves.contains(&mv("e4d3")));
    assert!(moves.contains(&mv("c5d4")));
}

#[test]
fn test_en_passant_by_pinned_pawn() {
    // the e5 pawn is pinned on the e-file
    let game = Game::from_fen("4r1k1/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
    assert!(!game.legal_moves().contains(&mv("e5d6")));
    assert!(game.legal_moves().contains(&mv("e5e6")));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let game = Game::from_fen("4r1k1/8/8/8/8/8/4q3/4K3 w - - 0 1").unwrap();
    assert!(!game.legal_moves().contains(&mv("e1e2")));
    assert!(game.is_checkmate());
}

#[test]
fn test_king_may_not_retreat_along_check_line() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").unwrap();
    let moves = game.legal_moves();
    assert!(!moves.contains(&mv("e1f1")));
    assert!(!moves.contains(&mv("e1d1")));
    assert!(moves.contains(&mv("e1e2")));
}

#[test]
fn test_underpromotions_available() {
    let game = Game::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let promos: Vec<String> = game
        .legal_moves()
        .iter()
        .filter(|m| m.is_promotion())
        .map(|m| m.display(game.piece_set()).to_string())
        .collect();
    assert_eq!(promos.len(), 4);
    for expected in ["a7a8n", "a7a8b", "a7a8r", "a7a8q"] {
        assert!(promos.iter().any(|p| p == expected), "{expected}");
    }
}

#[test]
fn test_side_without_king_gets_pseudo_moves() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/R7 w - - 0 1").unwrap();
    assert_eq!(game.legal_moves().len(), 14);
    assert!(!game.is_in_check());
}
