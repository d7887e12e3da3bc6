//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Complete board state: the 9 cells, the placement count, and whether the
/// game is still running.
///
/// Positions in the public API are 1-based (1..=9, row-major), matching the
/// move contract; `cell` takes a 0-based index. This type implements `Copy`
/// so the search engine can explore throwaway snapshots without touching the
/// original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    move_count: usize,
    active: bool,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            move_count: 0,
            active: true,
        }
    }

    /// Restore the initial state: all cells empty, game running
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Create a board from a 9-character string of '.'/'X'/'O' cells.
    /// Whitespace is filtered out. The move count and terminal status are
    /// derived from the cells.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 9 cell characters are present or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or(crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
            })?;
        }

        let move_count = cells.iter().filter(|&&c| c != Cell::Empty).count();
        let mut board = Board {
            cells,
            move_count,
            active: true,
        };
        board.update_status();
        Ok(board)
    }

    /// Attempt to place a token for `player` at a 1-based position.
    ///
    /// Returns `false` without mutating anything when the position is outside
    /// 1..=9, the target cell is occupied, or the board is already full. On
    /// success the terminal status is recomputed immediately, so `active`,
    /// `winner` and `is_full` are consistent as soon as this returns.
    pub fn place(&mut self, player: Player, position: usize) -> bool {
        if self.move_count >= 9 || !self.is_empty(position) {
            return false;
        }
        self.cells[position - 1] = player.to_cell();
        self.move_count += 1;
        self.update_status();
        true
    }

    /// Whether a 1-based position refers to a playable (empty) cell.
    /// Out-of-range positions are not playable rather than an error.
    pub fn is_empty(&self, position: usize) -> bool {
        (1..=9).contains(&position) && self.cells[position - 1] == Cell::Empty
    }

    /// Get the cell at a 0-based index, or `None` when out of range
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// The winner, if a complete line exists. Pure query; lines are scanned
    /// columns first, then rows, then the two diagonals.
    pub fn winner(&self) -> Option<Player> {
        lines::first_winner(&self.cells)
    }

    /// Whether all 9 cells are occupied. Pure query.
    pub fn is_full(&self) -> bool {
        self.move_count >= 9
    }

    /// Whether the game has neither a winner nor a full board
    pub fn active(&self) -> bool {
        self.active
    }

    /// Number of successful placements so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// All playable positions, 1-based, in increasing order
    pub fn empty_positions(&self) -> Vec<usize> {
        (1..=9).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Recompute the terminal status. Called after every placement so the
    /// read-only queries stay side-effect free.
    fn update_status(&mut self) {
        if self.winner().is_some() || self.is_full() {
            self.active = false;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert!(board.active());
        assert_eq!(board.move_count(), 0);
        for i in 0..9 {
            assert_eq!(board.cell(i), Some(Cell::Empty));
        }
    }

    #[test]
    fn test_place_and_move_count() {
        let mut board = Board::new();
        assert!(board.place(Player::X, 5));
        assert_eq!(board.cell(4), Some(Cell::X));
        assert_eq!(board.move_count(), 1);

        assert!(board.place(Player::O, 1));
        assert_eq!(board.move_count(), 2);
    }

    #[test]
    fn test_place_occupied_cell_fails_without_mutation() {
        let mut board = Board::new();
        assert!(board.place(Player::X, 5));
        let snapshot = board;

        assert!(!board.place(Player::O, 5));
        assert_eq!(board, snapshot);
        assert_eq!(board.cell(4), Some(Cell::X));
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let mut board = Board::new();
        assert!(!board.place(Player::X, 0));
        assert!(!board.place(Player::X, 10));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_is_empty_bounds() {
        let board = Board::new();
        assert!(board.is_empty(1));
        assert!(board.is_empty(9));
        assert!(!board.is_empty(0));
        assert!(!board.is_empty(10));
    }

    #[test]
    fn test_cell_out_of_range_sentinel() {
        let board = Board::new();
        assert_eq!(board.cell(8), Some(Cell::Empty));
        assert_eq!(board.cell(9), None);
    }

    #[test]
    fn test_win_sets_inactive() {
        let mut board = Board::new();
        board.place(Player::X, 1);
        board.place(Player::O, 4);
        board.place(Player::X, 2);
        board.place(Player::O, 5);
        assert!(board.active());

        board.place(Player::X, 3);
        assert!(!board.active());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert!(!board.active());
    }

    #[test]
    fn test_place_after_full_board_fails() {
        let mut board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(!board.place(Player::X, 1));
        assert_eq!(board.move_count(), 9);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut board = Board::new();
        board.place(Player::X, 1);
        board.place(Player::X, 2);
        board.place(Player::X, 3);
        assert!(!board.active());

        board.reset();
        assert_eq!(board, Board::new());
        assert!(board.active());
    }

    #[test]
    fn test_copy_snapshots_are_independent() {
        let mut board = Board::new();
        board.place(Player::X, 1);

        let mut copy = board;
        copy.place(Player::O, 2);

        assert_eq!(board.cell(1), Some(Cell::Empty));
        assert_eq!(copy.cell(1), Some(Cell::O));
    }

    #[test]
    fn test_empty_positions() {
        let mut board = Board::new();
        assert_eq!(board.empty_positions(), (1..=9).collect::<Vec<_>>());

        board.place(Player::X, 5);
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&5));
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(board.cell(0), Some(Cell::X));
        assert_eq!(board.cell(3), Some(Cell::O));
        assert_eq!(board.move_count(), 4);
        assert!(board.active());

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_from_string_detects_terminal() {
        let won = Board::from_string("XXXOO....").unwrap();
        assert!(!won.active());
        assert_eq!(won.winner(), Some(Player::X));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let rendered = format!("{board}");
        assert_eq!(rendered, "XOX\n.O.\nX..");
    }
}
