use super::super::types::{Bitboard, Move, MoveList, Square};
use super::MoveGen;

/// A king move of exactly two files along its rank.
#[inline]
pub(crate) fn is_castling_move(from: Square, to: Square) -> bool {
    from.rank() == to.rank() && from.file().abs_diff(to.file()) == 2
}

impl MoveGen<'_> {
    /// Candidate moves when the king on `king` is attacked by `checkers`.
    ///
    /// The king may step anywhere except further along the line of a sliding
    /// checker. Against a single checker every other piece may capture it or, if
    /// it checks by sliding, interpose on the squares between.
    pub(crate) fn escape_moves(&self, king: Square, checkers: Bitboard, moves: &mut MoveList) {
        let king_bb = Bitboard::from_square(king);
        let mut xray = Bitboard::EMPTY;
        for checker in checkers.scan_forward() {
            if self.checks_by_sliding(checker, king) {
                xray |= self.tables.ray(checker, king) & !Bitboard::from_square(checker);
            }
        }
        let targets = self.piece_targets(self.set.king(), king) & !xray;
        for to in targets.scan_forward() {
            moves.push(Move::new(king, to));
        }

        if !checkers.is_one_bit_on() {
            return;
        }
        let checker = checkers.lsb();
        let mut end_mask = checkers;
        if self.checks_by_sliding(checker, king) {
            end_mask |= self.tables.between(checker, king);
        }
        self.pseudo_moves(!king_bb, end_mask, moves);
    }

    /// Whether the piece on `checker` reaches `king` only along a slide.
    fn checks_by_sliding(&self, checker: Square, king: Square) -> bool {
        let Some(id) = self.board.piece_at(checker) else {
            return false;
        };
        !self.set.step_attacks(id, self.them, checker).contains(king)
            && self.set.slide_attacks(id, checker, self.board.all).contains(king)
    }

    /// Castling moves of the king on `king`, landing on `end_mask`.
    ///
    /// Every back-rank square with castling rights that holds one of our castling
    /// pieces is a candidate. The king moves two files toward it and the piece
    /// lands on the square the king crossed.
    pub(crate) fn castling_moves(&self, king: Square, end_mask: Bitboard, moves: &mut MoveList) {
        let back_rank = self.us.back_rank();
        if !back_rank.contains(king) {
            return;
        }
        let king_bb = Bitboard::from_square(king);
        let candidates = self.board.castling & back_rank & self.board.color(self.us) & !king_bb;
        let mut seen = Bitboard::EMPTY;

        for partner in candidates.scan_forward() {
            let Some(id) = self.board.piece_at(partner) else {
                continue;
            };
            if id == self.set.king() || !self.set.descriptor(id).can_castle {
                continue;
            }
            if !(self.tables.between(king, partner) & self.board.all).is_empty() {
                continue;
            }

            let to_bb = if partner.file() > king.file() {
                king_bb.shift_2_right()
            } else {
                king_bb.shift_2_left()
            };
            if to_bb.is_empty() || !(to_bb & end_mask & !seen).is_one_bit_on() {
                continue;
            }
            let to = to_bb.lsb();
            if self.board.all.contains(to) && to != partner {
                continue;
            }
            let path = self.tables.between(king, to) | to_bb;
            if self.any_attacked(path, self.them) {
                continue;
            }
            seen |= to_bb;
            moves.push(Move::new(king, to));
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

    fn castles(game: &Game) -> Vec<Move> {
        game.legal_moves()
            .iter()
            .copied()
            .filter(|m| Some(m.from) == game.board().king_square(game.turn(), game.piece_set()))
            .filter(|m| is_castling_move(m.from, m.to))
            .collect()
    }

    #[test]
    fn test_is_castling_move() {
        assert!(is_castling_move(sq("e1"), sq("g1")));
        assert!(is_castling_move(sq("e8"), sq("c8")));
        assert!(!is_castling_move(sq("e1"), sq("f1")));
        assert!(!is_castling_move(sq("e1"), sq("g2")));
    }

    #[test]
    fn test_both_sides_available() {
        let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = castles(&game);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(sq("e1"), sq("g1"))));
        assert!(moves.contains(&Move::new(sq("e1"), sq("c1"))));
    }

    #[test]
    fn test_blocked_and_attacked_paths() {
        // b1 occupied blocks the long side
        let game = Game::from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1").unwrap();
        assert_eq!(castles(&game), vec![Move::new(sq("e1"), sq("g1"))]);

        // f1 attacked by the bishop on c4
        let game = Game::from_fen("4k3/8/8/8/2b5/8/8/R3K2R w KQ - 0 1").unwrap();
        assert_eq!(castles(&game), vec![Move::new(sq("e1"), sq("c1"))]);

        // an attacked b1 does not matter, the king never crosses it
        let game = Game::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
        assert_eq!(castles(&game), vec![Move::new(sq("e1"), sq("c1"))]);
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let game = Game::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
        assert!(game.is_in_check());
        assert!(castles(&game).is_empty());
    }

    #[test]
    fn test_rights_required() {
        let game = Game::from_fen("4k3/8/8/8/8/8/8/R3K2R w K - 0 1").unwrap();
        assert_eq!(castles(&game), vec![Move::new(sq("e1"), sq("g1"))]);
        let game = Game::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
        assert!(castles(&game).is_empty());
    }

    #[test]
    fn test_escape_by_interposition_and_capture() {
        // rook on e8 checks down the file; Nc3 can block on e4 or e2
        let game = Game::from_fen("k3r3/8/8/8/8/2N5/8/4K3 w - - 0 1").unwrap();
        let moves = game.legal_moves();
        assert!(moves.contains(&Move::new(sq("c3"), sq("e4"))));
        assert!(moves.contains(&Move::new(sq("c3"), sq("e2"))));
        assert!(!moves.contains(&Move::new(sq("c3"), sq("d5"))));
        // e2 is still on the checking file
        assert!(!moves.contains(&Move::new(sq("e1"), sq("e2"))));
        assert!(moves.contains(&Move::new(sq("e1"), sq("d1"))));
    }

    #[test]
    fn test_knight_check_cannot_be_blocked() {
        let game = Game::from_fen("k7/8/8/8/8/3n4/8/R3K3 w - - 0 1").unwrap();
        assert!(game.is_in_check());
        for mv in game.legal_moves().iter() {
            assert!(mv.from == sq("e1"), "{mv:?}");
        }
    }

    #[test]
    fn test_double_check_only_king_moves() {
        let game = Game::from_fen("k3r3/8/8/8/1b6/8/8/R3K3 w - - 0 1").unwrap();
        assert!(!game.legal_moves().is_empty());
        for mv in game.legal_moves().iter() {
            assert_eq!(mv.from, sq("e1"));
        }
    }
}
