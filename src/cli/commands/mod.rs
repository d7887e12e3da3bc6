//! CLI command implementations

pub mod export;
pub mod play;

use crate::{
    cli::input::stdin_move_reader,
    players::{HumanSource, MinimaxSource, MoveSource, RandomSource, SourceKind},
    random::StdRandom,
};

/// Build a boxed move source for one player slot.
///
/// `seed` derives a deterministic RNG for random sources when supplied.
fn build_source(kind: SourceKind, seed: Option<u64>) -> Box<dyn MoveSource> {
    match kind {
        SourceKind::Human => Box::new(HumanSource::new(stdin_move_reader())),
        SourceKind::Random => {
            let random = match seed {
                Some(seed) => StdRandom::with_seed(seed),
                None => StdRandom::new(),
            };
            Box::new(RandomSource::new(random))
        }
        SourceKind::Minimax => Box::new(MinimaxSource),
    }
}
