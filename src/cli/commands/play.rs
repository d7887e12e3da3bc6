//! Play command - run a single interactive or automated game

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    board::Player,
    cli::output::{print_board, print_outcome},
    game::play_game,
    players::GameMode,
    random::{RandomIndex, StdRandom},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game of Tic-Tac-Toe")]
pub struct PlayArgs {
    /// Player pairing (which source fills each player slot)
    #[arg(long, short = 'm', value_enum, default_value = "human-minimax")]
    pub mode: GameMode,

    /// Random seed for reproducible random players and first-player choice
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the finished game record as JSON
    #[arg(long)]
    pub record: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let (x_kind, o_kind) = args.mode.source_kinds();
    let mut x_source = super::build_source(x_kind, args.seed);
    let mut o_source = super::build_source(o_kind, args.seed.map(|s| s.wrapping_add(1)));

    let mut random = match args.seed {
        Some(seed) => StdRandom::with_seed(seed.wrapping_add(2)),
        None => StdRandom::new(),
    };
    let first = match random.int_in_range(1, 2) {
        1 => Player::X,
        _ => Player::O,
    };

    println!("Player {first} moves first.\n");
    let record = play_game(first, x_source.as_mut(), o_source.as_mut(), |board, mv| {
        println!("Player {} played {}.", mv.player, mv.position);
        print_board(board);
    })
    .context("game aborted")?;

    print_outcome(record.outcome);

    if let Some(path) = &args.record {
        record
            .write_json(path)
            .with_context(|| format!("failed to write game record to {}", path.display()))?;
        println!("Game record written to {}", path.display());
    }

    Ok(())
}
