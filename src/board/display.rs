use std::fmt;

use super::state::Game;
use super::types::Square;

impl fmt::Display for Game {
    /// Rank 8 at the top, White pieces uppercase, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let symbol = Square::new(rank, file)
                    .and_then(|sq| self.symbol_at(sq))
                    .unwrap_or('.');
                write!(f, " {symbol} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
