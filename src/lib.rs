//! Tic-Tac-Toe game engine with a perfect-play minimax opponent
//!
//! This crate provides:
//! - A 3x3 board with move legality, win/draw detection, and turn bookkeeping
//! - A depth-aware minimax search with alpha-beta pruning and a deterministic
//!   lowest-index tie-break
//! - A uniform move-source abstraction over human, random, and search-driven
//!   players, selected by a game-mode configuration
//! - Training-data export from simulated games

pub mod board;
pub mod cli;
pub mod error;
pub mod export;
pub mod game;
pub mod lines;
pub mod players;
pub mod random;
pub mod search;

pub use board::{Board, Cell, Player};
pub use error::{Error, Result};
pub use export::{ExportConfig, export_training_data, training_line};
pub use game::{GameOutcome, GameRecord, Move, play_game};
pub use players::{GameMode, MoveReader, MoveSource, SourceKind};
pub use random::{RandomIndex, StdRandom};
pub use search::Minimax;
