//! Board representation, rules and legal move generation.
//!
//! Pieces are described by data ([`PieceDescriptor`]) rather than by a fixed
//! enum, so a game can mix the standard pieces with custom ones chosen through
//! back-rank [`Deck`]s.
//!
//! # Example
//! ```
//! use chess_deck::board::{Game, GameResolution};
//!
//! let mut game = Game::standard();
//! assert_eq!(game.legal_moves().len(), 20);
//! let status = game.play("e2e4").unwrap();
//! assert_eq!(status, GameResolution::Ongoing);
//! ```

mod attack_tables;
pub mod catalog;
mod config;
mod deck;
mod display;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
mod pieces;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::{attack_tables, AttackTables, SlideAxis};
pub use config::{GameConfig, DEFAULT_MOVE_LIMIT, DEFAULT_REPETITION_THRESHOLD};
pub use deck::{budget, Deck, BLACK_BUDGET, KING_SLOT, WHITE_BUDGET};
pub use error::{DeckError, FenError, MoveParseError, PieceSetError, SquareError};
pub use pieces::{PieceDescriptor, PieceSet, SlideAxes, StepOffsets, MAX_PIECE_KINDS};
pub use state::{Board, Game};
pub use status::GameResolution;
pub use types::{
    Bitboard, Color, Move, MoveDisplay, MoveList, PieceId, Role, ScanForward, ScanReversed, Square,
};
