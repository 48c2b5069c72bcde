//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::win::check_winner;
use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
