//! Training-data export
//!
//! Produces one line per recorded position: nine comma-and-space-separated
//! fields in {-1, 0, 1} giving the board immediately before the move from
//! the recording player's perspective (mover = 1, opponent = -1, empty = 0),
//! followed by the 1-based move, e.g. `0, 0, 0, 0, 0, 0, 0, 0, 0, 5` for an
//! empty board with move 5. The format is consumed downstream and must be
//! reproduced exactly.

use std::{
    fmt::Write as _,
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::PathBuf,
};

use indicatif::ProgressBar;

use crate::{
    Result,
    board::{Board, Cell, Player},
    players::MoveSource,
    random::RandomIndex,
};

/// Configuration for a training-data export session
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Number of training lines to produce
    pub examples: usize,
    /// Output file; lines are appended
    pub output: PathBuf,
}

/// Encode a pre-move position and the chosen move as one training line
pub fn training_line(board: &Board, recorder: Player, position: usize) -> String {
    let mut line = String::new();
    for index in 0..9 {
        let value = match board.cell(index) {
            Some(Cell::Empty) | None => 0,
            Some(cell) if cell == recorder.to_cell() => 1,
            Some(_) => -1,
        };
        let _ = write!(line, "{value}, ");
    }
    let _ = write!(line, "{position}");
    line
}

/// Simulate games and append training lines until `config.examples` player-X
/// positions have been recorded.
///
/// Each episode starts from a reset board with a uniformly random first
/// player. Every position/move pair for player X is recorded before the
/// placement is applied. `progress` is ticked once per written line.
///
/// # Errors
///
/// Returns an error when a move source fails or the output file cannot be
/// written; an I/O failure aborts the session without corrupting in-memory
/// game state.
pub fn export_training_data<'a>(
    config: &ExportConfig,
    x_source: &'a mut dyn MoveSource,
    o_source: &'a mut dyn MoveSource,
    random: &mut dyn RandomIndex,
    progress: Option<&ProgressBar>,
) -> Result<usize> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.output)
        .map_err(|source| crate::Error::Io {
            operation: format!("open {}", config.output.display()),
            source,
        })?;
    let mut writer = BufWriter::new(file);

    let mut board = Board::new();
    let mut written = 0;

    while written < config.examples {
        let mut current = match random.int_in_range(1, 2) {
            1 => Player::X,
            _ => Player::O,
        };

        while board.active() && written < config.examples {
            let source = match current {
                Player::X => &mut *x_source,
                Player::O => &mut *o_source,
            };
            let position = source.select_move(&board, current)?;

            if current == Player::X {
                writeln!(writer, "{}", training_line(&board, current, position)).map_err(
                    |source| crate::Error::Io {
                        operation: format!("write to {}", config.output.display()),
                        source,
                    },
                )?;
                written += 1;
                if let Some(pb) = progress {
                    pb.inc(1);
                }
            }

            if !board.place(current, position) {
                return Err(crate::Error::IllegalMove { position });
            }
            current = current.opponent();
        }

        board.reset();
    }

    writer.flush().map_err(|source| crate::Error::Io {
        operation: format!("flush {}", config.output.display()),
        source,
    })?;

    Ok(written)
}
