//! Piece capability descriptors and the per-game piece set.
//!
//! Piece behavior is entirely data driven: a descriptor lists step offsets, slide
//! axes and rule flags, and `PieceSet` turns a list of descriptors into compact
//! `PieceId`s with precomputed step tables.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attack_tables::tables::build_step_table;
use super::attack_tables::{attack_tables, SlideAxis};
use super::error::PieceSetError;
use super::types::{Bitboard, Color, PieceId, Role, Square};

/// Maximum number of distinct piece kinds in one set.
pub const MAX_PIECE_KINDS: usize = 16;

/// Linear step offsets of a piece.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepOffsets {
    None,
    /// Same offsets for both colors
    Symmetric(Vec<i8>),
    /// Color-split offsets (pawn captures)
    ByColor { white: Vec<i8>, black: Vec<i8> },
}

impl StepOffsets {
    #[must_use]
    pub fn for_color(&self, color: Color) -> &[i8] {
        match self {
            StepOffsets::None => &[],
            StepOffsets::Symmetric(offsets) => offsets,
            StepOffsets::ByColor { white, black } => match color {
                Color::White => white,
                Color::Black => black,
            },
        }
    }
}

/// Axes a piece slides along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlideAxes {
    pub diagonal: bool,
    pub vertical: bool,
    pub horizontal: bool,
}

impl SlideAxes {
    pub const NONE: SlideAxes = SlideAxes {
        diagonal: false,
        vertical: false,
        horizontal: false,
    };
    pub const BISHOP: SlideAxes = SlideAxes {
        diagonal: true,
        vertical: false,
        horizontal: false,
    };
    pub const ROOK: SlideAxes = SlideAxes {
        diagonal: false,
        vertical: true,
        horizontal: true,
    };
    pub const QUEEN: SlideAxes = SlideAxes {
        diagonal: true,
        vertical: true,
        horizontal: true,
    };

    #[inline]
    #[must_use]
    pub const fn has(self, axis: SlideAxis) -> bool {
        match axis {
            SlideAxis::Diagonal => self.diagonal,
            SlideAxis::Vertical => self.vertical,
            SlideAxis::Horizontal => self.horizontal,
        }
    }

    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        self.diagonal || self.vertical || self.horizontal
    }
}

/// Immutable description of one piece kind.
///
/// `symbol` is the uppercase (White) letter; Black uses its lowercase form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceDescriptor {
    pub name: String,
    pub symbol: char,
    pub role: Role,
    pub steps: StepOffsets,
    pub slides: SlideAxes,
    pub can_castle: bool,
    pub invincible: bool,
    pub can_capture: bool,
    pub promotable: bool,
    pub price: u32,
}

impl PieceDescriptor {
    /// A regular piece that captures, may be promoted to, and has no moves yet.
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        PieceDescriptor {
            name: name.into(),
            symbol: symbol.to_ascii_uppercase(),
            role: Role::Regular,
            steps: StepOffsets::None,
            slides: SlideAxes::NONE,
            can_castle: false,
            invincible: false,
            can_capture: true,
            promotable: true,
            price: 0,
        }
    }

    /// Set the rule role; king and pawn roles are never promotion targets.
    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        if role != Role::Regular {
            self.promotable = false;
        }
        self
    }

    #[must_use]
    pub fn steps(mut self, offsets: &[i8]) -> Self {
        self.steps = StepOffsets::Symmetric(offsets.to_vec());
        self
    }

    #[must_use]
    pub fn steps_by_color(mut self, white: &[i8], black: &[i8]) -> Self {
        self.steps = StepOffsets::ByColor {
            white: white.to_vec(),
            black: black.to_vec(),
        };
        self
    }

    #[must_use]
    pub fn slides(mut self, slides: SlideAxes) -> Self {
        self.slides = slides;
        self
    }

    #[must_use]
    pub fn castles(mut self) -> Self {
        self.can_castle = true;
        self
    }

    #[must_use]
    pub fn invincible(mut self) -> Self {
        self.invincible = true;
        self
    }

    #[must_use]
    pub fn non_capturing(mut self) -> Self {
        self.can_capture = false;
        self
    }

    #[must_use]
    pub fn not_promotable(mut self) -> Self {
        self.promotable = false;
        self
    }

    #[must_use]
    pub fn price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_slider(&self) -> bool {
        self.slides.any()
    }

    #[inline]
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        !matches!(self.steps, StepOffsets::ByColor { .. })
    }

    /// Symbol as written for `color`
    #[inline]
    #[must_use]
    pub fn symbol_for(&self, color: Color) -> char {
        match color {
            Color::White => self.symbol,
            Color::Black => self.symbol.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for PieceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[derive(Clone, Debug)]
struct PieceKind {
    descriptor: PieceDescriptor,
    /// Step attacks indexed by `[color][square]`
    steps: Box<[[Bitboard; 64]; 2]>,
}

/// The rules of one game: the piece kinds in play and each color's promotion list.
#[derive(Clone, Debug)]
pub struct PieceSet {
    kinds: Vec<PieceKind>,
    king: PieceId,
    pawn: PieceId,
    promotions: [Vec<PieceId>; 2],
}

impl PieceSet {
    /// Build a piece set. Descriptors repeating an earlier name are ignored.
    ///
    /// Requires exactly one king-role and one pawn-role piece, unique symbols and
    /// at most [`MAX_PIECE_KINDS`] kinds. Both colors may promote to every
    /// promotable piece.
    pub fn new<I>(descriptors: I) -> Result<Self, PieceSetError>
    where
        I: IntoIterator<Item = PieceDescriptor>,
    {
        let mut unique: Vec<PieceDescriptor> = Vec::new();
        for desc in descriptors {
            if unique.iter().any(|d| d.name == desc.name) {
                continue;
            }
            if let Some(other) = unique.iter().find(|d| d.symbol == desc.symbol) {
                return Err(PieceSetError::DuplicateSymbol {
                    symbol: desc.symbol,
                    first: other.name.clone(),
                    second: desc.name,
                });
            }
            unique.push(desc);
        }
        if unique.len() > MAX_PIECE_KINDS {
            return Err(PieceSetError::TooManyKinds {
                count: unique.len(),
            });
        }

        let king = single_role(&unique, Role::King)?;
        let pawn = single_role(&unique, Role::Pawn)?;

        let kinds: Vec<PieceKind> = unique
            .into_iter()
            .map(|descriptor| {
                let white = build_step_table(descriptor.steps.for_color(Color::White));
                let black = if descriptor.is_symmetric() {
                    white
                } else {
                    build_step_table(descriptor.steps.for_color(Color::Black))
                };
                PieceKind {
                    descriptor,
                    steps: Box::new([white, black]),
                }
            })
            .collect();

        let promotable: Vec<PieceId> = kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| k.descriptor.promotable && k.descriptor.role == Role::Regular)
            .map(|(i, _)| PieceId(i as u8))
            .collect();

        debug_log!("piece set built with {} kinds", kinds.len());

        Ok(PieceSet {
            kinds,
            king,
            pawn,
            promotions: [promotable.clone(), promotable],
        })
    }

    /// King, Pawn, Knight, Bishop, Rook and Queen.
    #[must_use]
    pub fn standard() -> Self {
        use super::catalog;
        let set = PieceSet::new([
            catalog::king(),
            catalog::pawn(),
            catalog::knight(),
            catalog::bishop(),
            catalog::rook(),
            catalog::queen(),
        ]);
        match set {
            Ok(set) => set,
            Err(e) => unreachable!("standard piece set is valid: {e}"),
        }
    }

    /// Replace the promotion list of `color` with the named pieces, in order.
    pub fn with_promotions(mut self, color: Color, names: &[&str]) -> Result<Self, PieceSetError> {
        let mut list = Vec::with_capacity(names.len());
        for name in names {
            let id = self.id(name).ok_or_else(|| PieceSetError::UnknownPiece {
                name: (*name).to_string(),
            })?;
            let desc = self.descriptor(id);
            if desc.role != Role::Regular || !desc.promotable {
                return Err(PieceSetError::NotPromotable {
                    name: desc.name.clone(),
                });
            }
            if !list.contains(&id) {
                list.push(id);
            }
        }
        self.promotions[color.index()] = list;
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// All piece ids in declaration order
    pub fn ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        (0..self.kinds.len()).map(|i| PieceId(i as u8))
    }

    #[must_use]
    pub fn id(&self, name: &str) -> Option<PieceId> {
        self.kinds
            .iter()
            .position(|k| k.descriptor.name == name)
            .map(|i| PieceId(i as u8))
    }

    /// Resolve a board symbol: uppercase is White, lowercase is Black.
    #[must_use]
    pub fn by_symbol(&self, symbol: char) -> Option<(PieceId, Color)> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let upper = symbol.to_ascii_uppercase();
        self.kinds
            .iter()
            .position(|k| k.descriptor.symbol == upper)
            .map(|i| (PieceId(i as u8), color))
    }

    /// # Panics
    /// Panics if `id` does not belong to this set.
    #[inline]
    #[must_use]
    pub fn descriptor(&self, id: PieceId) -> &PieceDescriptor {
        &self.kinds[id.index()].descriptor
    }

    #[inline]
    #[must_use]
    pub fn king(&self) -> PieceId {
        self.king
    }

    #[inline]
    #[must_use]
    pub fn pawn(&self) -> PieceId {
        self.pawn
    }

    #[inline]
    #[must_use]
    pub fn promotions(&self, color: Color) -> &[PieceId] {
        &self.promotions[color.index()]
    }

    /// Step attacks of `id` standing on `sq`
    #[inline]
    #[must_use]
    pub fn step_attacks(&self, id: PieceId, color: Color, sq: Square) -> Bitboard {
        self.kinds[id.index()].steps[color.index()][sq.index()]
    }

    /// Slide attacks of `id` standing on `sq` for the given occupancy
    #[must_use]
    pub fn slide_attacks(&self, id: PieceId, sq: Square, occupancy: Bitboard) -> Bitboard {
        let slides = self.descriptor(id).slides;
        if !slides.any() {
            return Bitboard::EMPTY;
        }
        let tables = attack_tables();
        SlideAxis::ALL
            .iter()
            .filter(|&&axis| slides.has(axis))
            .fold(Bitboard::EMPTY, |acc, &axis| {
                acc | tables.slide(axis, sq, occupancy)
            })
    }

    /// Every square `id` attacks from `sq`
    #[inline]
    #[must_use]
    pub fn attacks(&self, id: PieceId, color: Color, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.step_attacks(id, color, sq) | self.slide_attacks(id, sq, occupancy)
    }
}

fn single_role(descriptors: &[PieceDescriptor], role: Role) -> Result<PieceId, PieceSetError> {
    let mut found = descriptors
        .iter()
        .enumerate()
        .filter(|(_, d)| d.role == role)
        .map(|(i, _)| PieceId(i as u8));
    match (found.next(), found.next()) {
        (Some(id), None) => Ok(id),
        (None, _) => Err(PieceSetError::MissingRole { role }),
        (Some(_), Some(_)) => Err(PieceSetError::DuplicateRole { role }),
    }
}
