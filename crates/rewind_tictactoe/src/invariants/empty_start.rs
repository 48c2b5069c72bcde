//! Start invariant: the first snapshot is the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: `history[0]` is the empty board with no move coordinate.
pub struct EmptyStartInvariant;

impl Invariant<GameState> for EmptyStartInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .get(0)
            .is_some_and(|entry| entry.board() == Board::new() && entry.coordinate().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board and no move"
    }
}
