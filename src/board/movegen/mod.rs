//! Legal move generation.
//!
//! Two modes, chosen per call: when the side to move is not in check every
//! pseudo-legal move is generated and filtered by [`MoveGen::is_safe`]; when it is
//! in check only king escapes and (against a single checker) captures or
//! interpositions are generated, then filtered the same way.

mod checks;
mod kings;
mod pawns;

pub(crate) use kings::is_castling_move;
pub(crate) use pawns::en_passant_victim;

use super::attack_tables::{attack_tables, AttackTables};
use super::error::MoveParseError;
use super::pieces::PieceSet;
use super::state::{Board, Game};
use super::types::{Bitboard, Color, Move, MoveList, PieceId, Square};

/// Read-only view of one position for move generation.
pub(crate) struct MoveGen<'a> {
    pub(crate) board: &'a Board,
    pub(crate) set: &'a PieceSet,
    pub(crate) tables: &'static AttackTables,
    pub(crate) us: Color,
    pub(crate) them: Color,
}

impl<'a> MoveGen<'a> {
    pub(crate) fn new(board: &'a Board, set: &'a PieceSet) -> Self {
        MoveGen {
            board,
            set,
            tables: attack_tables(),
            us: board.turn,
            them: board.turn.opponent(),
        }
    }

    /// All legal moves of the side to move.
    ///
    /// A side without a king has no safety constraints; its pseudo-legal moves are
    /// returned as they are.
    pub(crate) fn legal_moves(&self) -> MoveList {
        let Some(king) = self.board.king_square(self.us, self.set) else {
            let mut moves = MoveList::new();
            self.pseudo_moves(Bitboard::ALL, Bitboard::ALL, &mut moves);
            return moves;
        };

        let checkers = self.attackers_of(king, self.them, self.board.all);
        let blockers = self.blockers(king, self.us);
        let mut moves = MoveList::new();
        if checkers.is_empty() {
            self.pseudo_moves(Bitboard::ALL, Bitboard::ALL, &mut moves);
        } else {
            self.escape_moves(king, checkers, &mut moves);
        }
        moves.retain(|mv| self.is_safe(king, mv, blockers));
        moves
    }

    /// Pseudo-legal moves of pieces on `start_mask` landing on `end_mask`.
    pub(crate) fn pseudo_moves(&self, start_mask: Bitboard, end_mask: Bitboard, moves: &mut MoveList) {
        let pawn = self.set.pawn();
        for id in self.set.ids() {
            if id == pawn {
                continue;
            }
            let from_squares = self.board.pieces_of(id, self.us) & start_mask;
            for from in from_squares.scan_forward() {
                let targets = self.piece_targets(id, from) & end_mask;
                for to in targets.scan_forward() {
                    moves.push(Move::new(from, to));
                }
            }
        }

        let pawns = self.board.pieces_of(pawn, self.us) & start_mask;
        self.pawn_captures(pawns, end_mask, moves);
        self.pawn_pushes(pawns, end_mask, moves);

        let king = self.board.pieces_of(self.set.king(), self.us) & start_mask;
        if !king.is_empty() {
            self.castling_moves(king.lsb(), end_mask, moves);
        }
    }

    /// Destinations of a non-pawn piece: its attacks minus own pieces and
    /// invincible pieces, restricted to empty squares for non-capturing pieces.
    pub(crate) fn piece_targets(&self, id: PieceId, from: Square) -> Bitboard {
        let attacks = self.set.attacks(id, self.us, from, self.board.all);
        let mut targets = attacks & !self.board.color(self.us) & !self.board.invincible;
        if !self.set.descriptor(id).can_capture {
            targets &= !self.board.all;
        }
        targets
    }

    #[inline]
    pub(crate) fn is_pawn_at(&self, sq: Square) -> bool {
        self.board.pieces(self.set.pawn()).contains(sq)
    }
}

impl Game {
    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        MoveGen::new(&self.board, &self.pieces).legal_moves()
    }

    /// Pieces of `color` attacking `sq` (non-capturing pieces never attack).
    #[must_use]
    pub fn attackers_of(&self, sq: Square, color: Color) -> Bitboard {
        MoveGen::new(&self.board, &self.pieces).attackers_of(sq, color, self.board.all)
    }

    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, color: Color) -> bool {
        !self.attackers_of(sq, color).is_empty()
    }

    /// Whether the side to move has its king attacked.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        let us = self.board.turn;
        self.board
            .king_square(us, &self.pieces)
            .is_some_and(|king| self.is_square_attacked(king, us.opponent()))
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.legal_moves().is_empty()
    }

    /// Resolve coordinate notation (`e2e4`, `e7e8q`) against the legal moves.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        let len = text.chars().count();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        if !text.is_ascii() {
            return Err(invalid_square());
        }
        let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => {
                let id = self
                    .pieces
                    .by_symbol(c)
                    .map(|(id, _)| id)
                    .filter(|id| self.pieces.promotions(self.board.turn).contains(id))
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(id)
            }
        };
        let mv = Move { from, to, promotion };
        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
        }
    }
}
