//! Position state and game session.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::catalog;
use super::config::GameConfig;
use super::deck::Deck;
use super::error::DeckError;
use super::pieces::{PieceSet, MAX_PIECE_KINDS};
use super::types::{Bitboard, Color, Move, PieceId, Role, Square};

/// A full position snapshot.
///
/// Invariants after every mutation:
/// - `all == colors[White] | colors[Black]` and the color boards are disjoint
/// - piece boards are pairwise disjoint and their union is `all`
/// - `invincible` and `non_capture` hold exactly the squares whose occupant has
///   that capability
/// - `en_passant` has at most one square set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) pieces: [Bitboard; MAX_PIECE_KINDS],
    pub(crate) colors: [Bitboard; 2],
    pub(crate) all: Bitboard,
    pub(crate) castling: Bitboard,
    pub(crate) en_passant: Bitboard,
    pub(crate) invincible: Bitboard,
    pub(crate) non_capture: Bitboard,
    pub(crate) turn: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// Empty board, White to move, move 1.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [Bitboard::EMPTY; MAX_PIECE_KINDS],
            colors: [Bitboard::EMPTY; 2],
            all: Bitboard::EMPTY,
            castling: Bitboard::EMPTY,
            en_passant: Bitboard::EMPTY,
            invincible: Bitboard::EMPTY,
            non_capture: Bitboard::EMPTY,
            turn: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Decks on the back ranks, pawns in front of them, castling rights on every
    /// corner holding a castling piece.
    ///
    /// Pieces missing from `set` are skipped.
    #[must_use]
    pub fn from_decks(set: &PieceSet, white: &Deck, black: &Deck) -> Self {
        let mut board = Board::empty();
        let pawn = set.pawn();
        for (color, deck) in [(Color::White, white), (Color::Black, black)] {
            let back_rank = match color {
                Color::White => 0,
                Color::Black => 7,
            };
            for sq in color.pawn_start_rank().scan_forward() {
                board.set_piece(sq, pawn, color, set);
            }
            for (file, desc) in deck.pieces() {
                let (Some(id), Some(sq)) = (set.id(&desc.name), Square::new(back_rank, file)) else {
                    continue;
                };
                board.set_piece(sq, id, color, set);
                if desc.can_castle && Bitboard::CORNERS.contains(sq) {
                    board.castling |= Bitboard::from_square(sq);
                }
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Squares holding piece kind `id` (both colors)
    #[inline]
    #[must_use]
    pub fn pieces(&self, id: PieceId) -> Bitboard {
        self.pieces[id.index()]
    }

    /// Squares holding piece kind `id` of `color`
    #[inline]
    #[must_use]
    pub fn pieces_of(&self, id: PieceId, color: Color) -> Bitboard {
        self.pieces[id.index()] & self.colors[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn color(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.all
    }

    /// Squares from which castling is still allowed
    #[inline]
    #[must_use]
    pub fn castling(&self) -> Bitboard {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        if self.en_passant.is_empty() {
            None
        } else {
            Some(self.en_passant.lsb())
        }
    }

    #[inline]
    #[must_use]
    pub fn invincible(&self) -> Bitboard {
        self.invincible
    }

    #[inline]
    #[must_use]
    pub fn non_capture(&self) -> Bitboard {
        self.non_capture
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PieceId> {
        if !self.all.contains(sq) {
            return None;
        }
        self.pieces
            .iter()
            .position(|bb| bb.contains(sq))
            .map(|i| PieceId(i as u8))
    }

    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|c| self.colors[c.index()].contains(sq))
    }

    /// Square of `color`'s king, if it has one
    #[must_use]
    pub fn king_square(&self, color: Color, set: &PieceSet) -> Option<Square> {
        let kings = self.pieces_of(set.king(), color);
        if kings.is_empty() {
            None
        } else {
            Some(kings.lsb())
        }
    }

    /// Place a piece, replacing whatever stood on `sq`.
    pub fn set_piece(&mut self, sq: Square, id: PieceId, color: Color, set: &PieceSet) {
        self.remove_piece(sq);
        let bit = Bitboard::from_square(sq);
        self.pieces[id.index()] |= bit;
        self.colors[color.index()] |= bit;
        self.all |= bit;
        let desc = set.descriptor(id);
        if desc.invincible {
            self.invincible |= bit;
        }
        if !desc.can_capture {
            self.non_capture |= bit;
        }
    }

    /// Clear `sq`, returning what stood there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<(PieceId, Color)> {
        let id = self.piece_at(sq)?;
        let color = self.color_at(sq)?;
        let clear = !Bitboard::from_square(sq);
        self.pieces[id.index()] &= clear;
        self.colors[color.index()] &= clear;
        self.all &= clear;
        self.invincible &= clear;
        self.non_capture &= clear;
        Some((id, color))
    }

    /// Recompute the capability boards by scanning every piece board.
    pub(crate) fn refresh_capabilities(&mut self, set: &PieceSet) {
        self.invincible = Bitboard::EMPTY;
        self.non_capture = Bitboard::EMPTY;
        for id in set.ids() {
            let desc = set.descriptor(id);
            if desc.invincible {
                self.invincible |= self.pieces[id.index()];
            }
            if !desc.can_capture {
                self.non_capture |= self.pieces[id.index()];
            }
        }
    }

    /// Same placement, side to move, castling rights and en passant square.
    /// Move clocks are ignored.
    #[must_use]
    pub fn same_position(&self, other: &Board) -> bool {
        self.pieces == other.pieces
            && self.colors == other.colors
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.turn == other.turn
    }

    /// Check every structural invariant against `set`.
    #[must_use]
    pub fn is_consistent(&self, set: &PieceSet) -> bool {
        let [white, black] = self.colors;
        if white & black != Bitboard::EMPTY || white | black != self.all {
            return false;
        }
        let mut union = Bitboard::EMPTY;
        for (i, &bb) in self.pieces.iter().enumerate() {
            if i >= set.len() && !bb.is_empty() {
                return false;
            }
            if union & bb != Bitboard::EMPTY {
                return false;
            }
            union |= bb;
        }
        if union != self.all || self.en_passant.popcount() > 1 {
            return false;
        }
        let mut expected = *self;
        expected.refresh_capabilities(set);
        expected.invincible == self.invincible && expected.non_capture == self.non_capture
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// A game session: the rules, the live position and its history.
///
/// `history` always holds at least the initial snapshot and its last entry equals
/// `board`; `moves[i]` led from `history[i]` to `history[i + 1]`.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) pieces: Arc<PieceSet>,
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) history: Vec<Board>,
    pub(crate) moves: Vec<Move>,
}

impl Game {
    /// Start a game from `board` with default configuration.
    ///
    /// The capability boards of `board` are recomputed from `pieces`.
    #[must_use]
    pub fn new(pieces: Arc<PieceSet>, mut board: Board) -> Self {
        board.refresh_capabilities(&pieces);
        Game {
            pieces,
            config: GameConfig::default(),
            board,
            history: vec![board],
            moves: Vec::new(),
        }
    }

    /// The standard starting position with the standard piece set.
    #[must_use]
    pub fn standard() -> Self {
        let set = PieceSet::standard();
        let deck = Deck::standard();
        let board = Board::from_decks(&set, &deck, &deck);
        Game::new(Arc::new(set), board)
    }

    /// A game between two decks.
    ///
    /// Both decks are validated; the piece set holds the king, the pawn and every
    /// deck piece, and each color promotes to the promotable pieces of its own deck.
    pub fn from_decks(white: &Deck, black: &Deck) -> Result<Self, DeckError> {
        white.validate(Color::White)?;
        black.validate(Color::Black)?;

        let descriptors = [catalog::king(), catalog::pawn()]
            .into_iter()
            .chain(white.pieces().map(|(_, d)| d.clone()))
            .chain(black.pieces().map(|(_, d)| d.clone()));
        let mut set = PieceSet::new(descriptors)?;
        for (color, deck) in [(Color::White, white), (Color::Black, black)] {
            let mut names: Vec<&str> = Vec::new();
            for (_, desc) in deck.pieces() {
                if desc.promotable && desc.role == Role::Regular && !names.contains(&desc.name.as_str()) {
                    names.push(&desc.name);
                }
            }
            set = set.with_promotions(color, &names)?;
        }

        debug_log!("game from decks {white} / {black}");
        let board = Board::from_decks(&set, white, black);
        Ok(Game::new(Arc::new(set), board))
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_set(&self) -> &PieceSet {
        &self.pieces
    }

    /// Shared handle to the rules, for building further games
    #[must_use]
    pub fn piece_set_handle(&self) -> Arc<PieceSet> {
        Arc::clone(&self.pieces)
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.board.turn
    }

    /// Snapshots from the initial position to the current one
    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Moves applied so far
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Color and kind of the piece on `sq`
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, PieceId)> {
        let id = self.board.piece_at(sq)?;
        let color = self.board.color_at(sq)?;
        Some((color, id))
    }

    /// Symbol of the piece on `sq`, uppercase for White
    #[must_use]
    pub fn symbol_at(&self, sq: Square) -> Option<char> {
        self.piece_at(sq)
            .map(|(color, id)| self.pieces.descriptor(id).symbol_for(color))
    }
}
