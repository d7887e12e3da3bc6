//! Output formatting and progress bars for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{board::Board, game::GameOutcome};

/// Create a progress bar for training-data export
pub fn create_export_progress(total_examples: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_examples);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} examples")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print the board as a 3x3 grid
pub fn print_board(board: &Board) {
    println!("{board}");
    println!();
}

/// Print the final result of a game
pub fn print_outcome(outcome: GameOutcome) {
    match outcome {
        GameOutcome::Win(player) => println!("Player {player} has won."),
        GameOutcome::Draw => println!("No player has won."),
    }
}
