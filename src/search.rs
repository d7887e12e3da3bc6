//! Perfect-play move selection via minimax with alpha-beta pruning

use crate::{
    Result,
    board::{Board, Player},
};

/// Minimax search for one designated maximizing player.
///
/// The search explores throwaway copies of the board, so the position handed
/// to [`best_move`](Minimax::best_move) is never mutated. Terminal scores are
/// biased by depth (`10 - depth` for a win, `depth - 10` for a loss, `0` for
/// a draw) so the engine prefers the fastest win and the slowest loss. The
/// tree is at most 9 plies deep, so the search always runs to terminal
/// leaves.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    player: Player,
}

impl Minimax {
    /// Create a search engine that maximizes for `player`
    pub fn new(player: Player) -> Self {
        Minimax { player }
    }

    /// Return the best playable 1-based position for the designated player.
    ///
    /// Candidates are scored in increasing position order and a later
    /// candidate replaces the provisional best only on a strictly greater
    /// score, so ties break toward the lowest position. The result is
    /// deterministic across repeated calls.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) if the
    /// board has no empty cell.
    pub fn best_move(&self, board: &Board) -> Result<usize> {
        let mut best: Option<(usize, i32)> = None;

        for position in 1..=9 {
            if !board.is_empty(position) {
                continue;
            }
            let mut child = *board;
            child.place(self.player, position);
            let score = self.evaluate(&child, self.player.opponent(), 1, i32::MIN, i32::MAX);

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((position, score)),
            }
        }

        best.map(|(position, _)| position)
            .ok_or(crate::Error::NoValidMoves)
    }

    /// Score a position with `to_move` next to act.
    ///
    /// Maximizing branches raise `alpha`, minimizing branches lower `beta`,
    /// and sibling exploration stops once `beta <= alpha`.
    fn evaluate(
        &self,
        board: &Board,
        to_move: Player,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if !board.active() {
            return match board.winner() {
                Some(winner) if winner == self.player => 10 - depth,
                Some(_) => depth - 10,
                None => 0,
            };
        }

        if to_move == self.player {
            let mut best = i32::MIN;
            for position in 1..=9 {
                if !board.is_empty(position) {
                    continue;
                }
                let mut child = *board;
                child.place(to_move, position);
                best = best.max(self.evaluate(&child, to_move.opponent(), depth + 1, alpha, beta));
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for position in 1..=9 {
                if !board.is_empty(position) {
                    continue;
                }
                let mut child = *board;
                child.place(to_move, position);
                best = best.min(self.evaluate(&child, to_move.opponent(), depth + 1, alpha, beta));
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
