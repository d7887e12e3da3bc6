//! Interactive move reading

use std::io::{BufRead, StdinLock, Write, stdin, stdout};

use crate::{
    Result,
    board::{Board, Player},
    players::MoveReader,
};

/// Move reader that prompts on stdout and reads 1-based positions from a
/// buffered line source.
///
/// Malformed, out-of-range, or occupied-cell input is rejected and
/// re-requested here; callers always receive a playable position.
pub struct LineMoveReader<R: BufRead> {
    input: R,
}

impl<R: BufRead> LineMoveReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|source| crate::Error::Io {
                operation: "read move".to_string(),
                source,
            })?;
        if bytes == 0 {
            return Err(crate::Error::Io {
                operation: "read move".to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input stream closed",
                ),
            });
        }
        Ok(line)
    }
}

impl<R: BufRead> MoveReader for LineMoveReader<R> {
    fn read_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        println!("Player {player} move (1-9):");
        loop {
            let _ = stdout().flush();
            let line = self.read_line()?;
            match line.trim().parse::<usize>() {
                Ok(position) if board.is_empty(position) => return Ok(position),
                _ => println!("Enter a value between 1 and 9 with an empty slot."),
            }
        }
    }
}

/// Reader backed by standard input
pub type StdinMoveReader = LineMoveReader<StdinLock<'static>>;

/// Create a move reader over the locked standard input
pub fn stdin_move_reader() -> StdinMoveReader {
    LineMoveReader::new(stdin().lock())
}
