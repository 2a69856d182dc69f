//! Attacker, pin and move safety analysis.

use super::super::attack_tables::SlideAxis;
use super::super::types::{Bitboard, Color, Move, Square};
use super::kings::is_castling_move;
use super::pawns::en_passant_victim;
use super::MoveGen;

impl MoveGen<'_> {
    /// Pieces of `color` attacking `sq` given `occupancy`. Non-capturing pieces
    /// are never attackers.
    pub(crate) fn attackers_of(&self, sq: Square, color: Color, occupancy: Bitboard) -> Bitboard {
        let candidates = self.board.color(color) & !self.board.non_capture;
        let mut attackers = Bitboard::EMPTY;
        for id in self.set.ids() {
            for from in (self.board.pieces(id) & candidates).scan_forward() {
                if self.set.attacks(id, color, from, occupancy).contains(sq) {
                    attackers |= Bitboard::from_square(from);
                }
            }
        }
        attackers
    }

    fn is_attacked(&self, sq: Square, color: Color, occupancy: Bitboard) -> bool {
        let candidates = self.board.color(color) & !self.board.non_capture;
        self.set.ids().any(|id| {
            (self.board.pieces(id) & candidates)
                .scan_forward()
                .any(|from| self.set.attacks(id, color, from, occupancy).contains(sq))
        })
    }

    /// Whether any square of `squares` is attacked by `color`
    pub(crate) fn any_attacked(&self, squares: Bitboard, color: Color) -> bool {
        squares
            .scan_forward()
            .any(|sq| self.is_attacked(sq, color, self.board.all))
    }

    /// Pieces of `color` that alone shield the king on `king` from an opposing
    /// slider (pinned pieces).
    pub(crate) fn blockers(&self, king: Square, color: Color) -> Bitboard {
        let enemy = color.opponent();
        let mut snipers = Bitboard::EMPTY;
        for id in self.set.ids() {
            let desc = self.set.descriptor(id);
            if !desc.is_slider() || !desc.can_capture {
                continue;
            }
            let pieces = self.board.pieces_of(id, enemy);
            if pieces.is_empty() {
                continue;
            }
            for axis in SlideAxis::ALL {
                if desc.slides.has(axis) {
                    snipers |= self.tables.reach(axis, king) & pieces;
                }
            }
        }

        let mut blockers = Bitboard::EMPTY;
        for sniper in snipers.scan_forward() {
            let between = self.tables.between(sniper, king) & self.board.all;
            if between.is_one_bit_on() {
                blockers |= between;
            }
        }
        blockers & self.board.color(color)
    }

    /// Whether `mv` leaves the king on `king` unattacked.
    ///
    /// Castling was validated when generated. Other king moves are checked with
    /// the king lifted off the board so a slider cannot hide behind it. En passant
    /// is re-evaluated with both pawns gone. A pinned piece must land on the
    /// line through its king without jumping over the king or the pinner.
    pub(crate) fn is_safe(&self, king: Square, mv: &Move, blockers: Bitboard) -> bool {
        if mv.from == king {
            if is_castling_move(mv.from, mv.to) {
                return true;
            }
            let occupancy = self.board.all & !Bitboard::from_square(king);
            return !self.is_attacked(mv.to, self.them, occupancy);
        }
        if self.is_en_passant(mv) {
            return !self.en_passant_exposes_king(king, mv);
        }
        if !blockers.contains(mv.from) {
            return true;
        }
        self.tables.ray(mv.from, mv.to).contains(king)
            && (self.tables.between(mv.from, mv.to) & self.board.all).is_empty()
    }

    pub(crate) fn is_en_passant(&self, mv: &Move) -> bool {
        self.board.en_passant.contains(mv.to) && self.is_pawn_at(mv.from)
    }

    /// Recompute every opposing slider against the position after the capture.
    /// Covers pins of the capturing pawn as well as the rank skewer where both
    /// pawns leave the king's rank at once.
    fn en_passant_exposes_king(&self, king: Square, mv: &Move) -> bool {
        let mut occupancy = self.board.all & !Bitboard::from_square(mv.from);
        if let Some(victim) = en_passant_victim(mv.to, self.us) {
            occupancy &= !Bitboard::from_square(victim);
        }
        occupancy |= Bitboard::from_square(mv.to);

        let candidates = self.board.color(self.them) & !self.board.non_capture;
        self.set.ids().any(|id| {
            if !self.set.descriptor(id).is_slider() {
                return false;
            }
            (self.board.pieces(id) & candidates)
                .scan_forward()
                .any(|from| self.set.slide_attacks(id, from, occupancy).contains(king))
        })
    }
}
