//! Rejection reasons for game operations.
//!
//! The public game operations treat every rejection as a no-op. The checked
//! variants return these so callers and tests can see why.

use crate::{Player, Position};

/// Why a move or jump was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The viewed board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied by {}", _0, _1)]
    SquareOccupied(Position, Player),

    /// History step that does not exist.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
