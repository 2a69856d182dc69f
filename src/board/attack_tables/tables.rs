//! Step (leaper) attack tables built from linear square offsets.

use crate::board::types::{Bitboard, Square};

/// Squares reached from `sq` by each offset.
///
/// Landings outside the board, or more than two files/ranks away from the origin
/// (a wrap across the board edge), are dropped.
#[must_use]
pub(crate) fn step_attacks(sq: Square, offsets: &[i8]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&delta| sq.offset(delta))
        .filter(|&target| sq.distance(target) <= 2)
        .fold(Bitboard::EMPTY, |acc, target| acc | Bitboard::from_square(target))
}

/// Per-square step table for one offset list
#[must_use]
pub(crate) fn build_step_table(offsets: &[i8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (slot, sq) in table.iter_mut().zip(Square::all()) {
        *slot = step_attacks(sq, offsets);
    }
    table
}
