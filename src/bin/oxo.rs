//! oxo CLI - play Tic-Tac-Toe against a perfect-play opponent or export
//! training data from simulated games

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-Tac-Toe engine with minimax search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(oxo::cli::commands::play::PlayArgs),

    /// Simulate games and export training data
    Export(oxo::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Export(args) => oxo::cli::commands::export::execute(args),
    }
}
