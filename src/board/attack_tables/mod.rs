//! Attack tables for move generation.
//!
//! Sliding attacks are precomputed per square and axis: every subset of the
//! edge-trimmed relevant mask is enumerated with the carry-rippler and its attack
//! set stored under a magic index, `((occupancy & mask) * magic) >> shift`.
//! Magics are searched once at startup from a fixed seed, so the tables are
//! identical on every run.
//!
//! Ray and between tables are derived from the empty-board slides.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates

pub(crate) mod tables;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::types::{Bitboard, Square};

/// Direction family of a sliding move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SlideAxis {
    Diagonal,
    Vertical,
    Horizontal,
}

impl SlideAxis {
    pub const ALL: [SlideAxis; 3] = [
        SlideAxis::Diagonal,
        SlideAxis::Vertical,
        SlideAxis::Horizontal,
    ];

    /// Linear square deltas walked along this axis
    #[must_use]
    pub const fn deltas(self) -> &'static [i8] {
        match self {
            SlideAxis::Diagonal => &[7, 9, -7, -9],
            SlideAxis::Vertical => &[8, -8],
            SlideAxis::Horizontal => &[1, -1],
        }
    }
}

/// Slide lookup for one square on one axis.
#[derive(Clone, Debug)]
pub(crate) struct SlideEntry {
    /// Relevant occupancy mask (empty-board attacks minus edges)
    mask: Bitboard,
    /// Empty-board attacks
    reach: Bitboard,
    magic: u64,
    /// `64 - popcount(mask)`; 64 when the mask is empty
    shift: u32,
    /// Attack sets by magic index
    attacks: Vec<Bitboard>,
}

impl SlideEntry {
    #[inline]
    fn index(&self, occupancy: Bitboard) -> usize {
        if self.shift == 64 {
            0
        } else {
            ((occupancy & self.mask).0.wrapping_mul(self.magic) >> self.shift) as usize
        }
    }
}

const MAGIC_SEED: u64 = 0x00C0_FFEE_DECC_5EED;

/// All process-wide tables.
pub struct AttackTables {
    diagonal: Vec<SlideEntry>,
    vertical: Vec<SlideEntry>,
    horizontal: Vec<SlideEntry>,
    rays: Box<[[Bitboard; 64]; 64]>,
    between: Box<[[Bitboard; 64]; 64]>,
}

static ATTACK_TABLES: Lazy<AttackTables> = Lazy::new(AttackTables::build);

/// Shared read-only tables, built on first use.
#[inline]
#[must_use]
pub fn attack_tables() -> &'static AttackTables {
    &ATTACK_TABLES
}

impl AttackTables {
    fn build() -> Self {
        let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
        let diagonal = build_slide_entries(SlideAxis::Diagonal, &mut rng);
        let vertical = build_slide_entries(SlideAxis::Vertical, &mut rng);
        let horizontal = build_slide_entries(SlideAxis::Horizontal, &mut rng);

        let mut rays = Box::new([[Bitboard::EMPTY; 64]; 64]);
        let mut between = Box::new([[Bitboard::EMPTY; 64]; 64]);
        for a in 0..64 {
            let sa = Square::from_index_unchecked(a);
            let a_bb = Bitboard::from_square(sa);
            for b in 0..64 {
                if a == b {
                    continue;
                }
                let sb = Square::from_index_unchecked(b);
                let b_bb = Bitboard::from_square(sb);
                let ray = if diagonal[a].reach.contains(sb) {
                    (diagonal[a].reach & diagonal[b].reach) | a_bb | b_bb
                } else if vertical[a].reach.contains(sb) {
                    vertical[a].reach | a_bb
                } else if horizontal[a].reach.contains(sb) {
                    horizontal[a].reach | a_bb
                } else {
                    Bitboard::EMPTY
                };
                rays[a][b] = ray;
                let span = ray & Bitboard((!0u64 << a) ^ (!0u64 << b));
                between[a][b] = Bitboard(span.0 & span.0.wrapping_sub(1));
            }
        }

        let entries: usize = [&diagonal, &vertical, &horizontal]
            .iter()
            .flat_map(|axis| axis.iter())
            .map(|e| e.attacks.len())
            .sum();
        debug_log!("attack tables built: {entries} slide entries");

        AttackTables {
            diagonal,
            vertical,
            horizontal,
            rays,
            between,
        }
    }

    #[inline]
    fn entries(&self, axis: SlideAxis) -> &[SlideEntry] {
        match axis {
            SlideAxis::Diagonal => &self.diagonal,
            SlideAxis::Vertical => &self.vertical,
            SlideAxis::Horizontal => &self.horizontal,
        }
    }

    /// Squares attacked from `sq` along `axis` given `occupancy`, first blocker
    /// included.
    #[inline]
    #[must_use]
    pub fn slide(&self, axis: SlideAxis, sq: Square, occupancy: Bitboard) -> Bitboard {
        let entry = &self.entries(axis)[sq.index()];
        entry.attacks[entry.index(occupancy)]
    }

    /// Empty-board slide from `sq` along `axis`
    #[inline]
    #[must_use]
    pub fn reach(&self, axis: SlideAxis, sq: Square) -> Bitboard {
        self.entries(axis)[sq.index()].reach
    }

    /// Edge-trimmed relevant occupancy mask
    #[inline]
    #[must_use]
    pub fn mask(&self, axis: SlideAxis, sq: Square) -> Bitboard {
        self.entries(axis)[sq.index()].mask
    }

    /// Full line through `a` and `b` (edge to edge) when they share a line,
    /// otherwise empty.
    #[inline]
    #[must_use]
    pub fn ray(&self, a: Square, b: Square) -> Bitboard {
        self.rays[a.index()][b.index()]
    }

    /// Squares strictly between `a` and `b` on their shared line.
    #[inline]
    #[must_use]
    pub fn between(&self, a: Square, b: Square) -> Bitboard {
        self.between[a.index()][b.index()]
    }
}

fn build_slide_entries(axis: SlideAxis, rng: &mut StdRng) -> Vec<SlideEntry> {
    let deltas = axis.deltas();
    Square::all()
        .map(|sq| {
            let reach = sliding_attacks(sq, Bitboard::EMPTY, deltas);
            let mask = reach & !edges(sq);
            let subsets: Vec<(Bitboard, Bitboard)> = carry_rippler(mask)
                .map(|subset| (subset, sliding_attacks(sq, subset, deltas)))
                .collect();
            let shift = 64 - mask.popcount();
            let (magic, attacks) = find_magic(&subsets, shift, rng);
            SlideEntry {
                mask,
                reach,
                magic,
                shift,
                attacks,
            }
        })
        .collect()
}

/// Try sparse random multipliers until every subset lands on a slot that is
/// either free or already holds the same attack set.
fn find_magic(
    subsets: &[(Bitboard, Bitboard)],
    shift: u32,
    rng: &mut StdRng,
) -> (u64, Vec<Bitboard>) {
    if shift == 64 {
        let attacks = subsets.first().map_or(Bitboard::EMPTY, |&(_, attacks)| attacks);
        return (0, vec![attacks]);
    }

    let size = 1usize << (64 - shift);
    let mut attacks = vec![Bitboard::EMPTY; size];
    let mut used = vec![false; size];
    loop {
        let magic = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        attacks.fill(Bitboard::EMPTY);
        used.fill(false);

        let fits = subsets.iter().all(|&(occupancy, attack)| {
            let index = (occupancy.0.wrapping_mul(magic) >> shift) as usize;
            if used[index] {
                attacks[index] == attack
            } else {
                used[index] = true;
                attacks[index] = attack;
                true
            }
        });
        if fits {
            return (magic, attacks);
        }
    }
}

/// Walk each delta from `sq`, adding squares up to and including the first
/// occupied one. A step that wraps a board edge ends the walk.
pub(crate) fn sliding_attacks(sq: Square, occupancy: Bitboard, deltas: &[i8]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &delta in deltas {
        let mut prev = sq;
        while let Some(next) = prev.offset(delta) {
            if prev.distance(next) > 2 {
                break;
            }
            attacks |= Bitboard::from_square(next);
            if occupancy.contains(next) {
                break;
            }
            prev = next;
        }
    }
    attacks
}

/// Board edges that are not on the square's own rank or file
fn edges(sq: Square) -> Bitboard {
    let ranks = (Bitboard::RANK_1 | Bitboard::RANK_8) & !Bitboard::rank_mask(sq.rank());
    let files = (Bitboard::FILE_A | Bitboard::FILE_H) & !Bitboard::file_mask(sq.file());
    ranks | files
}

/// Every subset of `mask`, in increasing numeric order, starting with the empty set.
fn carry_rippler(mask: Bitboard) -> impl Iterator<Item = Bitboard> {
    let mut subset = 0u64;
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let current = subset;
        subset = subset.wrapping_sub(mask.0) & mask.0;
        done = subset == 0;
        Some(Bitboard(current))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn bb(squares: &[&str]) -> Bitboard {
        squares
            .iter()
            .fold(Bitboard::EMPTY, |acc, s| acc | Bitboard::from_square(sq(s)))
    }

    #[test]
    fn test_table_sizes_match_masks() {
        let t = attack_tables();
        for axis in SlideAxis::ALL {
            for s in Square::all() {
                let entry = &t.entries(axis)[s.index()];
                assert_eq!(entry.attacks.len(), 1usize << entry.mask.popcount());
            }
        }
        // Corner rook: 6 relevant squares per line
        assert_eq!(t.mask(SlideAxis::Vertical, sq("a1")).popcount(), 6);
        assert_eq!(t.mask(SlideAxis::Diagonal, sq("d4")).popcount(), 9);
    }

    #[test]
    fn test_carry_rippler_enumerates_in_order() {
        let mask = Bitboard(0b1011);
        let subsets: Vec<u64> = carry_rippler(mask).map(|b| b.0).collect();
        assert_eq!(subsets, vec![0, 1, 2, 3, 8, 9, 10, 11]);
        assert_eq!(carry_rippler(Bitboard::EMPTY).count(), 1);
    }

    #[test]
    fn test_every_mask_subset_finds_its_attacks() {
        let t = attack_tables();
        for axis in SlideAxis::ALL {
            for s in Square::all() {
                let mask = t.mask(axis, s);
                for subset in carry_rippler(mask) {
                    // bits outside the mask never change the index
                    let noisy = subset | !mask;
                    assert_eq!(
                        t.slide(axis, s, noisy),
                        sliding_attacks(s, subset, axis.deltas()),
                        "{axis:?} from {s} with {subset:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_board_slides() {
        let t = attack_tables();
        let e4 = sq("e4");
        let rook = t.slide(SlideAxis::Vertical, e4, Bitboard::EMPTY)
            | t.slide(SlideAxis::Horizontal, e4, Bitboard::EMPTY);
        let expected = (Bitboard::rank_mask(3) | Bitboard::file_mask(4)) & !Bitboard::from_square(e4);
        assert_eq!(rook, expected);

        let bishop = t.slide(SlideAxis::Diagonal, sq("a1"), Bitboard::EMPTY);
        assert_eq!(bishop, bb(&["b2", "c3", "d4", "e5", "f6", "g7", "h8"]));
    }

    #[test]
    fn test_slides_stop_at_first_blocker() {
        let t = attack_tables();
        let occ = bb(&["e6", "c4", "e2", "g4", "h4"]);
        let vertical = t.slide(SlideAxis::Vertical, sq("e4"), occ);
        assert_eq!(vertical, bb(&["e5", "e6", "e3", "e2"]));
        let horizontal = t.slide(SlideAxis::Horizontal, sq("e4"), occ);
        assert_eq!(horizontal, bb(&["d4", "c4", "f4", "g4"]));

        let occ = bb(&["f6", "c2"]);
        let diag = t.slide(SlideAxis::Diagonal, sq("d4"), occ);
        assert_eq!(
            diag,
            bb(&["e5", "f6", "c3", "b2", "a1", "c5", "b6", "a7", "e3", "f2", "g1"])
        );
    }

    #[test]
    fn test_slides_match_direct_walk_for_edge_occupancy() {
        let t = attack_tables();
        let occ = Bitboard(0x8100_0000_0000_0081) | bb(&["d1", "a4", "h5", "e8"]);
        for s in Square::all() {
            for axis in SlideAxis::ALL {
                assert_eq!(
                    t.slide(axis, s, occ),
                    sliding_attacks(s, occ, axis.deltas()),
                    "{axis:?} from {s}"
                );
            }
        }
    }

    #[test]
    fn test_ray_and_between() {
        let t = attack_tables();
        assert_eq!(t.between(sq("a1"), sq("d4")), bb(&["b2", "c3"]));
        assert_eq!(t.between(sq("e1"), sq("e8")), bb(&["e2", "e3", "e4", "e5", "e6", "e7"]));
        assert_eq!(t.between(sq("a1"), sq("b2")), Bitboard::EMPTY);
        assert_eq!(t.between(sq("a1"), sq("b3")), Bitboard::EMPTY);
        assert_eq!(t.ray(sq("a1"), sq("b3")), Bitboard::EMPTY);
        assert_eq!(t.ray(sq("c3"), sq("e5")), Bitboard(0x8040_2010_0804_0201));
        assert_eq!(t.ray(sq("b4"), sq("g4")), Bitboard::rank_mask(3));
        assert_eq!(
            t.ray(sq("h2"), sq("b8")),
            bb(&["h2", "g3", "f4", "e5", "d6", "c7", "b8"])
        );
        for a in Square::all() {
            for b in Square::all() {
                assert_eq!(t.ray(a, b), t.ray(b, a));
                assert_eq!(t.between(a, b), t.between(b, a));
            }
        }
    }
}
