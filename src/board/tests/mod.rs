//! Board module tests.
//!
//! - `perft.rs` - node counts of well-known positions
//! - `edge_cases.rs` - pins, checks, en passant and castling corner cases
//! - `draw.rs` - move limit and repetition
//! - `make_unmake.rs` - push/pop round trips
//! - `custom_pieces.rs` - fairy pieces and decks
//! - `proptest.rs` - property-based tests

mod custom_pieces;
mod edge_cases;
mod perft;
