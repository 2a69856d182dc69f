//! Applying and undoing moves.

use super::error::MoveParseError;
use super::movegen::{en_passant_victim, is_castling_move};
use super::pieces::PieceSet;
use super::state::{Board, Game};
use super::status::GameResolution;
use super::types::{Bitboard, Color, Move, Role, Square};

impl Board {
    /// Play `mv` on this board. The move must be legal here.
    ///
    /// Returns false, leaving the board untouched, when `from` is empty.
    pub(crate) fn apply(&mut self, mv: Move, set: &PieceSet) -> bool {
        let Some(id) = self.piece_at(mv.from) else {
            return false;
        };
        let us = self.turn;
        let role = set.descriptor(id).role;
        let was_en_passant = role == Role::Pawn && self.en_passant.contains(mv.to);
        let is_capture = self.all.contains(mv.to) || was_en_passant;
        self.en_passant = Bitboard::EMPTY;

        if role == Role::King && is_castling_move(mv.from, mv.to) {
            self.relocate_castling_piece(mv.from, mv.to, set);
        }

        self.remove_piece(mv.from);
        self.set_piece(mv.to, id, us, set);

        if was_en_passant {
            if let Some(victim) = en_passant_victim(mv.to, us) {
                self.remove_piece(victim);
            }
        }

        if role == Role::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
            if let Some(crossed) = mv.from.offset(us.forward()) {
                self.en_passant = Bitboard::from_square(crossed);
            }
        }

        if let Some(promotion) = mv.promotion {
            self.set_piece(mv.to, promotion, us, set);
        }

        if role == Role::King {
            self.castling &= !us.back_rank();
        } else {
            self.castling &= !(Bitboard::from_square(mv.from) | Bitboard::from_square(mv.to));
        }
        // a captured castling piece loses its right as well
        self.castling &= !Bitboard::from_square(mv.to);

        if role == Role::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.turn = us.opponent();
        true
    }

    /// Move the nearest piece beyond the king, in the castling direction, onto
    /// the square the king crosses.
    fn relocate_castling_piece(&mut self, from: Square, to: Square, set: &PieceSet) {
        let step: i8 = if to.file() > from.file() { 1 } else { -1 };
        let Some(crossed) = from.offset(step) else {
            return;
        };
        let mut cursor = from;
        while let Some(next) = cursor.offset(step) {
            if next.rank() != from.rank() {
                break;
            }
            if self.all.contains(next) {
                if let Some((id, color)) = self.remove_piece(next) {
                    self.set_piece(crossed, id, color, set);
                }
                return;
            }
            cursor = next;
        }
    }
}

impl Game {
    /// Play `mv`, record it and report the resulting status.
    ///
    /// `mv` must come from [`Game::legal_moves`]; use [`Game::play`] for
    /// unchecked input.
    pub fn push(&mut self, mv: Move) -> GameResolution {
        self.apply(mv);
        self.status()
    }

    /// Play `mv` without resolving the status.
    pub(crate) fn apply(&mut self, mv: Move) {
        if self.board.apply(mv, &self.pieces) {
            self.history.push(self.board);
            self.moves.push(mv);
        } else {
            debug_log!("ignored move from empty square {}", mv.from);
        }
    }

    /// Parse coordinate notation, check it against the legal moves and play it.
    pub fn play(&mut self, notation: &str) -> Result<GameResolution, MoveParseError> {
        let mv = self.parse_move(notation)?;
        Ok(self.push(mv))
    }

    /// Undo the last move, restoring the previous snapshot exactly.
    ///
    /// Returns `None` when no move has been played.
    pub fn pop(&mut self) -> Option<Move> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        let previous = *self.history.last()?;
        self.board = previous;
        self.moves.pop()
    }
}
