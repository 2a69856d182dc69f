//! Back-rank decks.
//!
//! A deck is the eight-slot back rank of one color, a-file first. Pawns are not
//! part of a deck; they always fill the second rank.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use super::catalog;
use super::error::DeckError;
use super::pieces::PieceDescriptor;
use super::types::{Color, Role};

/// Price budget of a White deck.
pub const WHITE_BUDGET: u32 = 64;
/// Price budget of a Black deck.
pub const BLACK_BUDGET: u32 = 66;

/// Slot index of the king (e-file).
pub const KING_SLOT: usize = 4;

const CORNER_SLOTS: [usize; 2] = [0, 7];

#[must_use]
pub const fn budget(color: Color) -> u32 {
    match color {
        Color::White => WHITE_BUDGET,
        Color::Black => BLACK_BUDGET,
    }
}

/// Eight back-rank slots, a-file first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    slots: [Option<PieceDescriptor>; 8],
}

impl Deck {
    #[must_use]
    pub fn new(slots: [Option<PieceDescriptor>; 8]) -> Self {
        Deck { slots }
    }

    /// R N B Q K B N R
    #[must_use]
    pub fn standard() -> Self {
        Deck::new([
            Some(catalog::rook()),
            Some(catalog::knight()),
            Some(catalog::bishop()),
            Some(catalog::queen()),
            Some(catalog::king()),
            Some(catalog::bishop()),
            Some(catalog::knight()),
            Some(catalog::rook()),
        ])
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<PieceDescriptor>; 8] {
        &self.slots
    }

    /// Occupied slots with their file index
    pub fn pieces(&self) -> impl Iterator<Item = (usize, &PieceDescriptor)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(file, slot)| slot.as_ref().map(|d| (file, d)))
    }

    /// Sum of piece prices
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.pieces().map(|(_, d)| d.price).sum()
    }

    /// Check the deck against the rules for `color`.
    pub fn validate(&self, color: Color) -> Result<(), DeckError> {
        let weight = self.weight();
        let budget = budget(color);
        if weight > budget {
            return Err(DeckError::OverBudget {
                color,
                weight,
                budget,
            });
        }

        let kings = self
            .pieces()
            .filter(|(_, d)| d.role == Role::King)
            .count();
        if kings > 1 {
            return Err(DeckError::MultipleKings {
                color,
                count: kings,
            });
        }
        let king_in_place = self.slots[KING_SLOT]
            .as_ref()
            .is_some_and(|d| d.role == Role::King);
        if !king_in_place {
            return Err(DeckError::KingMisplaced { color });
        }

        if let Some((slot, _)) = self.pieces().find(|(_, d)| d.role == Role::Pawn) {
            return Err(DeckError::PawnInDeck { color, slot });
        }

        for slot in CORNER_SLOTS {
            let castles = self.slots[slot].as_ref().is_some_and(|d| d.can_castle);
            if !castles {
                return Err(DeckError::CornerCannotCastle { color, slot });
            }
        }
        Ok(())
    }

    /// A random legal deck for `color`.
    ///
    /// The king goes to the e-file, both corners get castling pieces, and the
    /// remaining slots are drawn from the catalog within the remaining budget.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, color: Color) -> Self {
        let pieces = catalog::deck_pieces();
        let castlers: Vec<&PieceDescriptor> = pieces.iter().filter(|d| d.can_castle).collect();
        let mut remaining = budget(color);
        let mut slots: [Option<PieceDescriptor>; 8] = Default::default();
        slots[KING_SLOT] = Some(catalog::king());

        for slot in CORNER_SLOTS {
            let affordable: Vec<&&PieceDescriptor> =
                castlers.iter().filter(|d| d.price <= remaining).collect();
            if let Some(choice) = affordable.choose(rng) {
                remaining -= choice.price;
                slots[slot] = Some((**choice).clone());
            }
        }

        let mut inner = [1, 2, 3, 5, 6];
        inner.shuffle(rng);
        for slot in inner {
            let affordable: Vec<&PieceDescriptor> =
                pieces.iter().filter(|d| d.price <= remaining).collect();
            if let Some(choice) = affordable.choose(rng) {
                remaining -= choice.price;
                slots[slot] = Some((*choice).clone());
            }
        }

        let deck = Deck::new(slots);
        debug_log!("random {color} deck: {deck} (weight {})", deck.weight());
        deck
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::standard()
    }
}

impl fmt::Display for Deck {
    /// Uppercase symbols, `.` for an empty slot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(d) => write!(f, "{}", d.symbol)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Deck {
    type Err = DeckError;

    /// Parse eight catalog symbols (case-insensitive), `.` for an empty slot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 8 {
            return Err(DeckError::WrongLength { len: chars.len() });
        }
        let mut slots: [Option<PieceDescriptor>; 8] = Default::default();
        for (slot, &c) in slots.iter_mut().zip(&chars) {
            if c == '.' {
                continue;
            }
            *slot = Some(catalog::by_symbol(c).ok_or(DeckError::UnknownSymbol { symbol: c })?);
        }
        Ok(Deck::new(slots))
    }
}
