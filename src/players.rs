//! Move sources and the game-mode configuration
//!
//! A move source is the uniform interface over the three ways a move can be
//! produced: human input, uniform-random selection, and minimax search. The
//! [`GameMode`] enumerates which source fills each of the two player slots.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{Board, Player},
    random::RandomIndex,
    search::Minimax,
};

/// Uniform interface over the move providers
pub trait MoveSource {
    /// Select a playable 1-based position for `player` on the given board.
    ///
    /// Implementations must return a position referencing an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error when no valid move exists or the underlying
    /// capability fails (e.g. the input stream closes).
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Name of the source, for display
    fn name(&self) -> &str;
}

/// External "read a validated move" capability consumed by [`HumanSource`].
///
/// Implementations block until a 1-based position referencing an empty cell
/// is obtained; rejecting and re-requesting malformed or unplayable input is
/// the reader's responsibility.
pub trait MoveReader {
    fn read_move(&mut self, board: &Board, player: Player) -> Result<usize>;
}

/// Move source that delegates to an external move reader
pub struct HumanSource<R: MoveReader> {
    reader: R,
}

impl<R: MoveReader> HumanSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: MoveReader> MoveSource for HumanSource<R> {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        self.reader.read_move(board, player)
    }

    fn name(&self) -> &str {
        "human"
    }
}

/// Move source that samples uniformly from [1, 9] until an empty cell is hit.
///
/// No retry bound is imposed; as long as at least one empty cell exists the
/// loop terminates with probability 1.
pub struct RandomSource<R: RandomIndex> {
    random: R,
}

impl<R: RandomIndex> RandomSource<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }
}

impl<R: RandomIndex> MoveSource for RandomSource<R> {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize> {
        if board.empty_positions().is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        loop {
            let position = self.random.int_in_range(1, 9);
            if board.is_empty(position) {
                return Ok(position);
            }
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Move source that delegates to the minimax search engine, with the acting
/// player as the maximizer
pub struct MinimaxSource;

impl MoveSource for MinimaxSource {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        Minimax::new(player).best_move(board)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Kind of move source filling a player slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Human,
    Random,
    Minimax,
}

/// The six player pairings. Player X fills the first slot, player O the
/// second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanHuman,
    HumanRandom,
    RandomRandom,
    HumanMinimax,
    MinimaxRandom,
    MinimaxMinimax,
}

impl GameMode {
    /// The source kinds for the (X, O) player slots
    pub fn source_kinds(self) -> (SourceKind, SourceKind) {
        match self {
            GameMode::HumanHuman => (SourceKind::Human, SourceKind::Human),
            GameMode::HumanRandom => (SourceKind::Human, SourceKind::Random),
            GameMode::RandomRandom => (SourceKind::Random, SourceKind::Random),
            GameMode::HumanMinimax => (SourceKind::Human, SourceKind::Minimax),
            GameMode::MinimaxRandom => (SourceKind::Minimax, SourceKind::Random),
            GameMode::MinimaxMinimax => (SourceKind::Minimax, SourceKind::Minimax),
        }
    }

    /// Whether either slot requires interactive input
    pub fn needs_input(self) -> bool {
        let (x, o) = self.source_kinds();
        x == SourceKind::Human || o == SourceKind::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted random source replaying a fixed sequence
    struct ScriptedRandom {
        values: Vec<usize>,
        next: usize,
    }

    impl ScriptedRandom {
        fn new(values: Vec<usize>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl RandomIndex for ScriptedRandom {
        fn int_in_range(&mut self, _min: usize, _max: usize) -> usize {
            let value = self.values[self.next];
            self.next += 1;
            value
        }
    }

    #[test]
    fn test_random_source_retries_until_empty() {
        let mut board = Board::new();
        board.place(Player::X, 5);

        let mut source = RandomSource::new(ScriptedRandom::new(vec![5, 5, 3]));
        let position = source.select_move(&board, Player::O).unwrap();
        assert_eq!(position, 3);
    }

    #[test]
    fn test_random_source_errors_on_full_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut source = RandomSource::new(ScriptedRandom::new(vec![]));
        assert!(matches!(
            source.select_move(&board, Player::X),
            Err(crate::Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_minimax_source_delegates_to_search() {
        let board = Board::from_string("XX.OO....").unwrap();
        let mut source = MinimaxSource;
        assert_eq!(source.select_move(&board, Player::X).unwrap(), 3);
    }

    #[test]
    fn test_mode_pairings() {
        assert_eq!(
            GameMode::HumanRandom.source_kinds(),
            (SourceKind::Human, SourceKind::Random)
        );
        assert_eq!(
            GameMode::MinimaxRandom.source_kinds(),
            (SourceKind::Minimax, SourceKind::Random)
        );
        assert!(GameMode::HumanMinimax.needs_input());
        assert!(!GameMode::MinimaxMinimax.needs_input());
    }
}
