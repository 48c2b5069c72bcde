//! The viewed step always names an existing snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step is a valid history index"
    }
}
