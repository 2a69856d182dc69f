//! Game rule configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fullmove number after which the game is drawn.
pub const DEFAULT_MOVE_LIMIT: u32 = 120;

/// Occurrences of one position that draw the game.
pub const DEFAULT_REPETITION_THRESHOLD: usize = 3;

/// Draw conditions of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// The game is drawn once the fullmove number exceeds this value
    pub move_limit: u32,
    /// The game is drawn once the current position has occurred this many times
    pub repetition_threshold: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            move_limit: DEFAULT_MOVE_LIMIT,
            repetition_threshold: DEFAULT_REPETITION_THRESHOLD,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_move_limit(mut self, move_limit: u32) -> Self {
        self.move_limit = move_limit;
        self
    }

    #[must_use]
    pub fn with_repetition_threshold(mut self, threshold: usize) -> Self {
        self.repetition_threshold = threshold.max(1);
        self
    }
}
