//! Game loop driving two move sources against each other

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{Board, Player},
    players::MoveSource,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub first: Player,
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    /// Write the record as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or serialization fails.
    pub fn write_json(&self, path: &std::path::Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Play a single game to completion.
///
/// `first` moves first; `x_source` supplies moves for player X and `o_source`
/// for player O. `on_move` is invoked after every successful placement with
/// the updated board, so callers can render progress without the core doing
/// any I/O.
///
/// A source returning an unplayable position violates the [`MoveSource`]
/// contract and is surfaced as [`Error::IllegalMove`](crate::Error::IllegalMove);
/// the turn does not advance in that case.
pub fn play_game<'a, F>(
    first: Player,
    x_source: &'a mut dyn MoveSource,
    o_source: &'a mut dyn MoveSource,
    mut on_move: F,
) -> Result<GameRecord>
where
    F: FnMut(&Board, Move),
{
    let mut board = Board::new();
    let mut current = first;
    let mut moves = Vec::new();

    while board.active() {
        let source = match current {
            Player::X => &mut *x_source,
            Player::O => &mut *o_source,
        };
        let position = source.select_move(&board, current)?;
        if !board.place(current, position) {
            return Err(crate::Error::IllegalMove { position });
        }

        let mv = Move {
            position,
            player: current,
        };
        moves.push(mv);
        on_move(&board, mv);
        current = current.opponent();
    }

    let outcome = match board.winner() {
        Some(winner) => GameOutcome::Win(winner),
        None => GameOutcome::Draw,
    };

    Ok(GameRecord {
        first,
        moves,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::MinimaxSource;

    /// Source replaying a fixed move script
    struct Scripted {
        moves: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        fn new(moves: Vec<usize>) -> Self {
            Self { moves, next: 0 }
        }
    }

    impl MoveSource for Scripted {
        fn select_move(&mut self, _board: &Board, _player: Player) -> Result<usize> {
            let position = self.moves[self.next];
            self.next += 1;
            Ok(position)
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_scripted_win() {
        let mut x = Scripted::new(vec![1, 2, 3]);
        let mut o = Scripted::new(vec![4, 5]);

        let record = play_game(Player::X, &mut x, &mut o, |_, _| {}).unwrap();
        assert_eq!(record.outcome, GameOutcome::Win(Player::X));
        assert_eq!(record.moves.len(), 5);
    }

    #[test]
    fn test_turns_alternate_from_first_player() {
        let mut x = Scripted::new(vec![2, 4]);
        let mut o = Scripted::new(vec![1, 5, 9]);

        // O moves first and wins on the main diagonal
        let record = play_game(Player::O, &mut x, &mut o, |_, _| {}).unwrap();
        assert_eq!(record.outcome, GameOutcome::Win(Player::O));
        let players: Vec<Player> = record.moves.iter().map(|m| m.player).collect();
        assert_eq!(
            players,
            vec![Player::O, Player::X, Player::O, Player::X, Player::O]
        );
    }

    #[test]
    fn test_illegal_scripted_move_is_an_error() {
        let mut x = Scripted::new(vec![1, 1]);
        let mut o = Scripted::new(vec![2, 3]);

        let result = play_game(Player::X, &mut x, &mut o, |_, _| {});
        assert!(matches!(
            result,
            Err(crate::Error::IllegalMove { position: 1 })
        ));
    }

    #[test]
    fn test_minimax_vs_minimax_draws() {
        let mut x = MinimaxSource;
        let mut o = MinimaxSource;

        let record = play_game(Player::X, &mut x, &mut o, |_, _| {}).unwrap();
        assert_eq!(record.outcome, GameOutcome::Draw);
        assert_eq!(record.moves.len(), 9);
    }

    #[test]
    fn test_on_move_sees_every_placement() {
        let mut x = Scripted::new(vec![1, 2, 3]);
        let mut o = Scripted::new(vec![4, 5]);

        let mut seen = Vec::new();
        play_game(Player::X, &mut x, &mut o, |board, mv| {
            seen.push((board.move_count(), mv.position));
        })
        .unwrap();

        assert_eq!(seen, vec![(1, 1), (2, 4), (3, 2), (4, 5), (5, 3)]);
    }
}
