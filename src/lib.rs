//! Legal move generation and game state for chess played with customizable
//! back-rank decks of standard and fairy pieces.

#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub mod board;
pub mod console;

pub use board::{Bitboard, Color, Deck, Game, GameConfig, GameResolution, Move, PieceSet, Square};
