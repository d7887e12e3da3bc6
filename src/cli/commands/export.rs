//! Export command - generate training data for downstream learners

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::create_export_progress,
    export::{ExportConfig, export_training_data},
    players::GameMode,
    random::StdRandom,
};

#[derive(Parser, Debug)]
#[command(about = "Simulate games and export training data")]
pub struct ExportArgs {
    /// Player pairing used to generate the games
    #[arg(long, short = 'm', value_enum, default_value = "minimax-random")]
    pub mode: GameMode,

    /// Number of training examples to record
    #[arg(long, short = 'n', default_value_t = 1000)]
    pub examples: usize,

    /// Output file; lines are appended
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let (x_kind, o_kind) = args.mode.source_kinds();
    let mut x_source = super::build_source(x_kind, args.seed);
    let mut o_source = super::build_source(o_kind, args.seed.map(|s| s.wrapping_add(1)));

    let mut random = match args.seed {
        Some(seed) => StdRandom::with_seed(seed.wrapping_add(2)),
        None => StdRandom::new(),
    };

    let config = ExportConfig {
        examples: args.examples,
        output: args.output.clone(),
    };

    // interactive modes prompt on the same terminal as the bar
    let show_progress = !args.quiet && !args.mode.needs_input();
    let progress = show_progress.then(|| create_export_progress(args.examples as u64));
    let written = export_training_data(
        &config,
        x_source.as_mut(),
        o_source.as_mut(),
        &mut random,
        progress.as_ref(),
    )
    .context("training-data export failed")?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    println!("Wrote {written} examples to {}", args.output.display());
    Ok(())
}
