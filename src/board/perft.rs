use super::state::Game;
use super::types::Move;

impl Game {
    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.apply(mv);
            nodes += self.perft(depth - 1);
            self.pop();
        }
        nodes
    }

    /// Node counts below each root move.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let moves = self.legal_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            self.apply(mv);
            counts.push((mv, self.perft(depth - 1)));
            self.pop();
        }
        debug_log!(
            "perft divide depth {depth}: {} nodes",
            counts.iter().map(|(_, n)| n).sum::<u64>()
        );
        counts
    }
}
