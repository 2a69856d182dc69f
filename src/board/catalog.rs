//! Built-in piece descriptors.

use super::pieces::{PieceDescriptor, SlideAxes};
use super::types::Role;

const KING_STEPS: [i8; 8] = [1, -1, 7, 8, 9, -7, -8, -9];
const KNIGHT_STEPS: [i8; 8] = [6, -6, 10, -10, 15, -15, 17, -17];

#[must_use]
pub fn king() -> PieceDescriptor {
    PieceDescriptor::new("King", 'K')
        .role(Role::King)
        .steps(&KING_STEPS)
}

/// Pawn steps are its captures; pushes come from the pawn role.
#[must_use]
pub fn pawn() -> PieceDescriptor {
    PieceDescriptor::new("Pawn", 'P')
        .role(Role::Pawn)
        .steps_by_color(&[7, 9], &[-7, -9])
        .price(1)
}

#[must_use]
pub fn knight() -> PieceDescriptor {
    PieceDescriptor::new("Knight", 'N')
        .steps(&KNIGHT_STEPS)
        .price(6)
}

#[must_use]
pub fn bishop() -> PieceDescriptor {
    PieceDescriptor::new("Bishop", 'B')
        .slides(SlideAxes::BISHOP)
        .price(6)
}

#[must_use]
pub fn rook() -> PieceDescriptor {
    PieceDescriptor::new("Rook", 'R')
        .slides(SlideAxes::ROOK)
        .castles()
        .price(10)
}

#[must_use]
pub fn queen() -> PieceDescriptor {
    PieceDescriptor::new("Queen", 'Q')
        .slides(SlideAxes::QUEEN)
        .price(16)
}

/// Bishop + knight
#[must_use]
pub fn archbishop() -> PieceDescriptor {
    PieceDescriptor::new("Archbishop", 'A')
        .slides(SlideAxes::BISHOP)
        .steps(&KNIGHT_STEPS)
        .price(12)
}

/// Rook + knight
#[must_use]
pub fn chancellor() -> PieceDescriptor {
    PieceDescriptor::new("Chancellor", 'C')
        .slides(SlideAxes::ROOK)
        .steps(&KNIGHT_STEPS)
        .castles()
        .price(16)
}

/// Leaps one or two squares orthogonally.
#[must_use]
pub fn ghost() -> PieceDescriptor {
    PieceDescriptor::new("Ghost", 'G')
        .steps(&[8, 16, -8, -16, 1, 2, -1, -2])
        .castles()
        .price(8)
}

/// Immobile blocker that can still castle.
#[must_use]
pub fn wall() -> PieceDescriptor {
    PieceDescriptor::new("Wall", 'W')
        .castles()
        .not_promotable()
}

/// Invincible, never captures, leaps two squares in any of the eight directions.
#[must_use]
pub fn frog() -> PieceDescriptor {
    PieceDescriptor::new("Frog", 'F')
        .steps(&[16, -16, 2, -2, 18, -18, 14, -14])
        .invincible()
        .non_capturing()
        .price(4)
}

/// Every catalog piece
#[must_use]
pub fn all() -> Vec<PieceDescriptor> {
    vec![
        king(),
        pawn(),
        knight(),
        bishop(),
        rook(),
        queen(),
        archbishop(),
        chancellor(),
        ghost(),
        wall(),
        frog(),
    ]
}

/// Pieces that may fill non-king deck slots
#[must_use]
pub fn deck_pieces() -> Vec<PieceDescriptor> {
    all()
        .into_iter()
        .filter(|d| d.role == Role::Regular)
        .collect()
}

#[must_use]
pub fn by_name(name: &str) -> Option<PieceDescriptor> {
    all().into_iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

/// Case-insensitive symbol lookup
#[must_use]
pub fn by_symbol(symbol: char) -> Option<PieceDescriptor> {
    let upper = symbol.to_ascii_uppercase();
    all().into_iter().find(|d| d.symbol == upper)
}
