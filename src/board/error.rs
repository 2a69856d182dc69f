//! Error types for board, rules and deck operations.

use std::fmt;

use super::types::{Color, Role};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Placement field does not have 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidClock { found: String },
    /// A rank does not describe exactly 8 files
    BadFileCount { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
            FenError::BadFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for invalid piece sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceSetError {
    /// No piece carries a required role
    MissingRole { role: Role },
    /// More than one piece carries a unique role
    DuplicateRole { role: Role },
    /// Two pieces share a symbol
    DuplicateSymbol {
        symbol: char,
        first: String,
        second: String,
    },
    /// More piece kinds than the board can index
    TooManyKinds { count: usize },
    /// Name not present in the set
    UnknownPiece { name: String },
    /// Piece cannot be a promotion target
    NotPromotable { name: String },
}

impl fmt::Display for PieceSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceSetError::MissingRole { role } => {
                write!(f, "Piece set has no {role:?} piece")
            }
            PieceSetError::DuplicateRole { role } => {
                write!(f, "Piece set has more than one {role:?} piece")
            }
            PieceSetError::DuplicateSymbol {
                symbol,
                first,
                second,
            } => {
                write!(f, "Symbol '{symbol}' used by both {first} and {second}")
            }
            PieceSetError::TooManyKinds { count } => {
                write!(
                    f,
                    "Piece set has {count} kinds, at most {} allowed",
                    super::pieces::MAX_PIECE_KINDS
                )
            }
            PieceSetError::UnknownPiece { name } => {
                write!(f, "Unknown piece '{name}'")
            }
            PieceSetError::NotPromotable { name } => {
                write!(f, "{name} cannot be a promotion piece")
            }
        }
    }
}

impl std::error::Error for PieceSetError {}

/// Error type for deck validation and game construction from decks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Total price exceeds the color's budget
    OverBudget {
        color: Color,
        weight: u32,
        budget: u32,
    },
    /// The e-file slot does not hold the king
    KingMisplaced { color: Color },
    /// More than one king in the deck
    MultipleKings { color: Color, count: usize },
    /// A corner slot is empty or holds a piece that cannot castle
    CornerCannotCastle { color: Color, slot: usize },
    /// Pawns are placed automatically and cannot be in a deck
    PawnInDeck { color: Color, slot: usize },
    /// Deck text uses a symbol not in the catalog
    UnknownSymbol { symbol: char },
    /// Deck text is not 8 slots long
    WrongLength { len: usize },
    /// The combined pieces do not form a valid set
    PieceSet(PieceSetError),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::OverBudget {
                color,
                weight,
                budget,
            } => {
                write!(f, "{color} deck costs {weight}, budget is {budget}")
            }
            DeckError::KingMisplaced { color } => {
                write!(f, "{color} deck must have its king on the e-file")
            }
            DeckError::MultipleKings { color, count } => {
                write!(f, "{color} deck has {count} kings")
            }
            DeckError::CornerCannotCastle { color, slot } => {
                write!(f, "{color} deck corner slot {slot} must hold a castling piece")
            }
            DeckError::PawnInDeck { color, slot } => {
                write!(f, "{color} deck has a pawn in slot {slot}")
            }
            DeckError::UnknownSymbol { symbol } => {
                write!(f, "Unknown deck symbol '{symbol}'")
            }
            DeckError::WrongLength { len } => {
                write!(f, "Deck must have 8 slots, found {len}")
            }
            DeckError::PieceSet(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::PieceSet(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PieceSetError> for DeckError {
    fn from(e: PieceSetError) -> Self {
        DeckError::PieceSet(e)
    }
}
