//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices, in the order the winner scan visits them:
/// columns top-to-bottom, then rows left-to-right, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Return the owner of the first complete line, scanning in `WINNING_LINES` order.
pub fn first_winner(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return first.to_player();
        }
    }
    None
}
