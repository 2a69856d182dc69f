//! Bitboard type and operations.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A 64-bit board mask, bit 0 = a1 ... bit 63 = h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_B: Bitboard = Bitboard(0x0202020202020202);
    pub const FILE_G: Bitboard = Bitboard(0x4040404040404040);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_2: Bitboard = Bitboard(0x000000000000FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF000000000000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const CORNERS: Bitboard = Bitboard(0x8100000000000081);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u64 << sq.index())
    }

    /// Get the file mask for a given file index (0-7)
    #[inline]
    #[must_use]
    pub const fn file_mask(file: usize) -> Self {
        Bitboard(Self::FILE_A.0 << file)
    }

    /// Get the rank mask for a given rank index (0-7)
    #[inline]
    #[must_use]
    pub const fn rank_mask(rank: usize) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * 8))
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of set bits
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    /// Index of the least significant set bit.
    ///
    /// # Panics
    /// Panics on an empty bitboard; callers guard with `is_empty` first.
    #[inline]
    #[must_use]
    pub fn lsb(self) -> Square {
        assert!(self.0 != 0, "lsb of an empty bitboard");
        Square::from_index_unchecked(self.0.trailing_zeros() as usize)
    }

    /// Index of the most significant set bit.
    ///
    /// # Panics
    /// Panics on an empty bitboard; callers guard with `is_empty` first.
    #[inline]
    #[must_use]
    pub fn msb(self) -> Square {
        assert!(self.0 != 0, "msb of an empty bitboard");
        Square::from_index_unchecked(63 - self.0.leading_zeros() as usize)
    }

    /// True when exactly one square is set.
    #[inline]
    #[must_use]
    pub fn is_one_bit_on(self) -> bool {
        !self.is_empty() && self.msb() == self.lsb()
    }

    /// Set squares in ascending order
    #[inline]
    #[must_use]
    pub fn scan_forward(self) -> ScanForward {
        ScanForward(self.0)
    }

    /// Set squares in descending order
    #[inline]
    #[must_use]
    pub fn scan_reversed(self) -> ScanReversed {
        ScanReversed(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn shift_up(self) -> Self {
        Bitboard(self.0 << 8)
    }

    #[inline]
    #[must_use]
    pub const fn shift_2_up(self) -> Self {
        Bitboard(self.0 << 16)
    }

    #[inline]
    #[must_use]
    pub const fn shift_down(self) -> Self {
        Bitboard(self.0 >> 8)
    }

    #[inline]
    #[must_use]
    pub const fn shift_2_down(self) -> Self {
        Bitboard(self.0 >> 16)
    }

    /// Shift toward file h, masking off file a wraparound
    #[inline]
    #[must_use]
    pub const fn shift_right(self) -> Self {
        Bitboard((self.0 << 1) & !Self::FILE_A.0)
    }

    #[inline]
    #[must_use]
    pub const fn shift_2_right(self) -> Self {
        Bitboard((self.0 << 2) & !(Self::FILE_A.0 | Self::FILE_B.0))
    }

    /// Shift toward file a, masking off file h wraparound
    #[inline]
    #[must_use]
    pub const fn shift_left(self) -> Self {
        Bitboard((self.0 >> 1) & !Self::FILE_H.0)
    }

    #[inline]
    #[must_use]
    pub const fn shift_2_left(self) -> Self {
        Bitboard((self.0 >> 2) & !(Self::FILE_G.0 | Self::FILE_H.0))
    }

    #[inline]
    #[must_use]
    pub const fn shift_up_left(self) -> Self {
        Bitboard((self.0 << 7) & !Self::FILE_H.0)
    }

    #[inline]
    #[must_use]
    pub const fn shift_up_right(self) -> Self {
        Bitboard((self.0 << 9) & !Self::FILE_A.0)
    }

    #[inline]
    #[must_use]
    pub const fn shift_down_left(self) -> Self {
        Bitboard((self.0 >> 9) & !Self::FILE_H.0)
    }

    #[inline]
    #[must_use]
    pub const fn shift_down_right(self) -> Self {
        Bitboard((self.0 >> 7) & !Self::FILE_A.0)
    }

    /// Mirror ranks (a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Bitboard(self.0.swap_bytes())
    }

    /// Mirror files (a1 <-> h1)
    #[must_use]
    pub const fn flip_horizontal(self) -> Self {
        const K1: u64 = 0x5555_5555_5555_5555;
        const K2: u64 = 0x3333_3333_3333_3333;
        const K4: u64 = 0x0f0f_0f0f_0f0f_0f0f;
        let mut x = self.0;
        x = ((x >> 1) & K1) | ((x & K1) << 1);
        x = ((x >> 2) & K2) | ((x & K2) << 2);
        x = ((x >> 4) & K4) | ((x & K4) << 4);
        Bitboard(x)
    }

    /// Mirror about the a1-h8 diagonal
    #[must_use]
    pub const fn flip_diagonal(self) -> Self {
        const K1: u64 = 0x5500_5500_5500_5500;
        const K2: u64 = 0x3333_0000_3333_0000;
        const K4: u64 = 0x0f0f_0f0f_0000_0000;
        let mut x = self.0;
        let mut t = K4 & (x ^ (x << 28));
        x ^= t ^ (t >> 28);
        t = K2 & (x ^ (x << 14));
        x ^= t ^ (t >> 14);
        t = K1 & (x ^ (x << 7));
        x ^= t ^ (t >> 7);
        Bitboard(x)
    }

    /// Mirror about the a8-h1 anti-diagonal
    #[must_use]
    pub const fn flip_anti_diagonal(self) -> Self {
        const K1: u64 = 0xaa00_aa00_aa00_aa00;
        const K2: u64 = 0xcccc_0000_cccc_0000;
        const K4: u64 = 0xf0f0_f0f0_0f0f_0f0f;
        let mut x = self.0;
        let mut t = x ^ (x << 36);
        x ^= K4 & (t ^ (x >> 36));
        t = K2 & (x ^ (x << 18));
        x ^= t ^ (t >> 18);
        t = K1 & (x ^ (x << 9));
        x ^= t ^ (t >> 9);
        Bitboard(x)
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Self {
        Bitboard::from_square(sq)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Display for Bitboard {
    /// Rank 8 first, `1` for set squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let bit = (self.0 >> (rank * 8 + file)) & 1;
                write!(f, "{bit}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Ascending iterator over set squares
pub struct ScanForward(u64);

impl Iterator for ScanForward {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Square::from_index_unchecked(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ScanForward {}

/// Descending iterator over set squares
pub struct ScanReversed(u64);

impl Iterator for ScanReversed {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = 63 - self.0.leading_zeros() as usize;
        self.0 ^= 1u64 << idx;
        Some(Square::from_index_unchecked(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ScanReversed {}
