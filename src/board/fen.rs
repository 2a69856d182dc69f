use std::str::FromStr;
use std::sync::Arc;

use super::error::FenError;
use super::pieces::PieceSet;
use super::state::{Board, Game};
use super::types::{Bitboard, Color, Square};

impl Board {
    /// Parse a FEN position whose piece letters are the symbols of `set`.
    ///
    /// Castling rights may be given as `KQkq` (corner pieces) or as file letters,
    /// uppercase for White. The move clocks are optional.
    pub fn from_fen(set: &PieceSet, fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let (id, color) = set.by_symbol(c).ok_or(FenError::InvalidPiece { char: c })?;
                let sq = Square::new(rank, file).ok_or(FenError::BadFileCount {
                    rank: rank + 1,
                    files: file + 1,
                })?;
                board.set_piece(sq, id, color, set);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        board.turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                board.castling |= castling_square(c).ok_or(FenError::InvalidCastling { char: c })?;
            }
        }

        if parts[3] != "-" {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let sq: Square = parts[3].parse().map_err(|_| invalid())?;
            if sq.rank() != 2 && sq.rank() != 5 {
                return Err(invalid());
            }
            board.en_passant = Bitboard::from_square(sq);
        }

        if let Some(clock) = parts.get(4) {
            board.halfmove_clock = parse_clock(clock)?;
        }
        if let Some(number) = parts.get(5) {
            board.fullmove_number = parse_clock(number)?.max(1);
        }

        Ok(board)
    }

    /// FEN of this position with the symbols of `set`.
    #[must_use]
    pub fn to_fen(&self, set: &PieceSet) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for sq in (0..8).filter_map(|file| Square::new(rank, file)) {
                match (self.piece_at(sq), self.color_at(sq)) {
                    (Some(id), Some(color)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(set.descriptor(id).symbol_for(color));
                    }
                    _ => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let mut castling = String::new();
        for color in Color::BOTH {
            for sq in (self.castling & color.back_rank()).scan_reversed() {
                castling.push(castling_char(sq, color));
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.turn.to_fen_char(),
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn castling_square(c: char) -> Option<Bitboard> {
    let (rank, file) = match c {
        'K' => (0, 7),
        'Q' => (0, 0),
        'k' => (7, 7),
        'q' => (7, 0),
        'A'..='H' => (0, c as usize - 'A' as usize),
        'a'..='h' => (7, c as usize - 'a' as usize),
        _ => return None,
    };
    Square::new(rank, file).map(Bitboard::from_square)
}

fn castling_char(sq: Square, color: Color) -> char {
    let c = match sq.file() {
        7 => 'k',
        0 => 'q',
        file => (b'a' + file as u8) as char,
    };
    match color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

fn parse_clock(text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidClock {
        found: text.to_string(),
    })
}

impl Game {
    /// A game with the standard piece set from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Game::from_fen_with(Arc::new(PieceSet::standard()), fen)
    }

    /// A game with a custom piece set from a FEN position.
    pub fn from_fen_with(pieces: Arc<PieceSet>, fen: &str) -> Result<Self, FenError> {
        let board = Board::from_fen(&pieces, fen)?;
        debug_log!("loaded FEN {fen}");
        Ok(Game::new(pieces, board))
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.board.to_fen(&self.pieces)
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_fen(s)
    }
}
