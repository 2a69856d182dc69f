//! Game resolution.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Game;
use super::types::Color;

/// Outcome of the current position, computed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResolution {
    WhiteWins,
    BlackWins,
    DrawByStalemate,
    DrawByRepetition,
    DrawByMoveLimit,
    Ongoing,
}

impl GameResolution {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResolution::Ongoing)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResolution::WhiteWins => Some(Color::White),
            GameResolution::BlackWins => Some(Color::Black),
            _ => None,
        }
    }

    const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResolution::WhiteWins,
            Color::Black => GameResolution::BlackWins,
        }
    }
}

impl fmt::Display for GameResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResolution::WhiteWins => "white wins",
            GameResolution::BlackWins => "black wins",
            GameResolution::DrawByStalemate => "draw by stalemate",
            GameResolution::DrawByRepetition => "draw by repetition",
            GameResolution::DrawByMoveLimit => "draw by move limit",
            GameResolution::Ongoing => "ongoing",
        };
        f.write_str(text)
    }
}

impl Game {
    /// Resolve the current position.
    ///
    /// Checked in order: no legal moves (mate or stalemate), the fullmove limit,
    /// then repetition of the current position.
    #[must_use]
    pub fn status(&self) -> GameResolution {
        if self.legal_moves().is_empty() {
            let resolution = if self.is_in_check() {
                GameResolution::win_for(self.turn().opponent())
            } else {
                GameResolution::DrawByStalemate
            };
            debug_log!("game over: {resolution}");
            return resolution;
        }
        if self.board.fullmove_number > self.config.move_limit {
            return GameResolution::DrawByMoveLimit;
        }
        if self.repetition_count() >= self.config.repetition_threshold {
            return GameResolution::DrawByRepetition;
        }
        GameResolution::Ongoing
    }

    /// How often the current position occurs in the history, itself included.
    /// Move clocks are ignored.
    #[must_use]
    pub fn repetition_count(&self) -> usize {
        self.history
            .iter()
            .filter(|snapshot| snapshot.same_position(&self.board))
            .count()
    }
}
