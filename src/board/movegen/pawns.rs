use super::super::types::{Bitboard, Color, Move, MoveList, Square};
use super::MoveGen;

/// Square of the pawn removed when `mover` captures en passant onto `ep`.
#[inline]
pub(crate) fn en_passant_victim(ep: Square, mover: Color) -> Option<Square> {
    ep.offset(-mover.forward())
}

impl MoveGen<'_> {
    /// Pawn captures onto enemy pieces (never invincible ones) and en passant.
    pub(crate) fn pawn_captures(&self, pawns: Bitboard, end_mask: Bitboard, moves: &mut MoveList) {
        let pawn = self.set.pawn();
        if pawns.is_empty() || !self.set.descriptor(pawn).can_capture {
            return;
        }
        let enemies = self.board.color(self.them) & !self.board.invincible & end_mask;
        let targets = enemies | self.en_passant_target(end_mask);
        for from in pawns.scan_forward() {
            let attacks = self.set.step_attacks(pawn, self.us, from) & targets;
            for to in attacks.scan_forward() {
                self.push_pawn_move(from, to, moves);
            }
        }
    }

    /// The en passant square, when capturing there is allowed under `end_mask`:
    /// either the square itself or the pawn it removes must be a wanted target.
    fn en_passant_target(&self, end_mask: Bitboard) -> Bitboard {
        let Some(ep) = self.board.en_passant() else {
            return Bitboard::EMPTY;
        };
        let Some(victim) = en_passant_victim(ep, self.us) else {
            return Bitboard::EMPTY;
        };
        let victim_bb = Bitboard::from_square(victim);
        let enemy_pawns = self.board.pieces_of(self.set.pawn(), self.them) & !self.board.invincible;
        if (enemy_pawns & victim_bb).is_empty() {
            return Bitboard::EMPTY;
        }
        if end_mask.contains(ep) || end_mask.contains(victim) {
            Bitboard::from_square(ep)
        } else {
            Bitboard::EMPTY
        }
    }

    /// Single pushes and double pushes from the start rank, onto empty squares
    /// only. A double push also needs the square it crosses to be empty.
    pub(crate) fn pawn_pushes(&self, pawns: Bitboard, end_mask: Bitboard, moves: &mut MoveList) {
        if pawns.is_empty() {
            return;
        }
        let empty = !self.board.all;
        let forward = self.us.forward();
        let (single, double) = match self.us {
            Color::White => {
                let single = pawns.shift_up() & empty;
                let double = (pawns & Color::White.pawn_start_rank()).shift_2_up()
                    & single.shift_up()
                    & empty;
                (single, double)
            }
            Color::Black => {
                let single = pawns.shift_down() & empty;
                let double = (pawns & Color::Black.pawn_start_rank()).shift_2_down()
                    & single.shift_down()
                    & empty;
                (single, double)
            }
        };

        for to in (single & end_mask).scan_forward() {
            if let Some(from) = to.offset(-forward) {
                self.push_pawn_move(from, to, moves);
            }
        }
        for to in (double & end_mask).scan_forward() {
            if let Some(from) = to.offset(-2 * forward) {
                moves.push(Move::new(from, to));
            }
        }
    }

    /// Push a pawn move, expanded into one move per promotion piece when it lands
    /// on the far rank. With no promotion pieces configured the pawn just moves.
    fn push_pawn_move(&self, from: Square, to: Square, moves: &mut MoveList) {
        let promotions = self.set.promotions(self.us);
        if self.us.promotion_rank().contains(to) && !promotions.is_empty() {
            for &piece in promotions {
                moves.push(Move::with_promotion(from, to, piece));
            }
        } else {
            moves.push(Move::new(from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::state::Game;
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn pawn_moves(game: &Game) -> MoveList {
        let gen = MoveGen::new(&game.board, &game.pieces);
        let pawns = game.board.pieces_of(game.pieces.pawn(), game.turn());
        let mut moves = MoveList::new();
        gen.pawn_captures(pawns, Bitboard::ALL, &mut moves);
        gen.pawn_pushes(pawns, Bitboard::ALL, &mut moves);
        moves
    }

    #[test]
    fn test_start_position_pushes() {
        let game = Game::standard();
        let moves = pawn_moves(&game);
        assert_eq!(moves.len(), 16);
        assert!(moves.contains(&Move::new(sq("e2"), sq("e4"))));
        assert!(moves.contains(&Move::new(sq("a2"), sq("a3"))));
    }

    #[test]
    fn test_double_push_needs_both_squares_empty() {
        // e2 is blocked at once, d2 only on its second step
        let game = Game::from_fen("4k3/8/8/8/3n4/4n3/3PP3/4K3 w - - 0 1").unwrap();
        let moves = pawn_moves(&game);
        assert!(!moves.contains(&Move::new(sq("e2"), sq("e3"))));
        assert!(!moves.contains(&Move::new(sq("e2"), sq("e4"))));
        assert!(moves.contains(&Move::new(sq("d2"), sq("d3"))));
        assert!(!moves.contains(&Move::new(sq("d2"), sq("d4"))));
        assert!(moves.contains(&Move::new(sq("d2"), sq("e3"))));
    }

    #[test]
    fn test_black_pawns_move_down() {
        let game = Game::from_fen("4k3/3p4/2P5/8/8/8/8/4K3 b - - 0 1").unwrap();
        let moves = pawn_moves(&game);
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::new(sq("d7"), sq("d6"))));
        assert!(moves.contains(&Move::new(sq("d7"), sq("d5"))));
        assert!(moves.contains(&Move::new(sq("d7"), sq("c6"))));
    }

    #[test]
    fn test_promotion_expansion() {
        let game = Game::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = pawn_moves(&game);
        // push and capture, four pieces each
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.is_promotion()));
    }

    #[test]
    fn test_en_passant_target() {
        let game = Game::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 2").unwrap();
        let moves = pawn_moves(&game);
        assert!(moves.contains(&Move::new(sq("d5"), sq("e6"))));
        assert!(moves.contains(&Move::new(sq("d5"), sq("d6"))));
        assert_eq!(en_passant_victim(sq("e6"), Color::White), Some(sq("e5")));
        assert_eq!(en_passant_victim(sq("d3"), Color::Black), Some(sq("d4")));
    }
}
