//! Core value types.
//!
//! - `Bitboard` - 64-bit square set with shifts, scans and flips
//! - `Square` - compact board square (u8)
//! - `Color`, `PieceId`, `Role` - sides and piece kind handles
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, ScanForward, ScanReversed};
pub use moves::{Move, MoveDisplay, MoveList};
pub use piece::{Color, PieceId, Role};
pub use square::Square;
