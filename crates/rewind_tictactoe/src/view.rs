//! Read-only projection of a [`GameState`] for presentation layers.
//!
//! A front end never reads the game state directly: after every event it asks
//! for a fresh [`GameView`] and renders that.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{GameState, Square};

/// Label of the step-0 history entry.
pub const START_LABEL: &str = "Go to game start";

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveDescriptor {
    /// History step this row jumps to.
    #[getter(copy)]
    step: usize,
    /// `Go to game start` or `Go to move #<step> (<col>,<row>)`.
    label: String,
    /// Whether this is the step currently viewed.
    #[getter(copy)]
    is_current: bool,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Squares of the viewed snapshot, row-major.
    board: [Square; 9],
    /// Status text.
    status: String,
    /// Indices of the winning line; empty when nobody has won.
    winning_line: Vec<usize>,
    /// Move list in history order.
    moves: Vec<MoveDescriptor>,
    /// Whether the move list should be shown newest first.
    #[getter(copy)]
    display_reversed: bool,
    /// Text for the control that flips the list order.
    order_toggle_label: String,
}

impl GameView {
    /// Move list in presentation order.
    pub fn ordered_moves(&self) -> Vec<&MoveDescriptor> {
        if self.display_reversed {
            self.moves.iter().rev().collect()
        } else {
            self.moves.iter().collect()
        }
    }

    /// Whether `index` belongs to the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line.contains(&index)
    }
}

impl GameState {
    /// Projects the state into a [`GameView`].
    #[instrument(level = "trace", skip(self))]
    pub fn view(&self) -> GameView {
        let current = self.current_step();
        let moves = self
            .history()
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveDescriptor {
                step,
                label: match entry.coordinate() {
                    Some(coord) => format!("Go to move #{} ({})", step, coord),
                    None => START_LABEL.to_string(),
                },
                is_current: step == current,
            })
            .collect();

        GameView {
            board: *self.current_board().squares(),
            status: self.status().to_string(),
            winning_line: self.winner().map(|w| w.line.to_vec()).unwrap_or_default(),
            moves,
            display_reversed: self.display_reversed(),
            order_toggle_label: if self.display_reversed() {
                "Sort ascending"
            } else {
                "Sort descending"
            }
            .to_string(),
        }
    }
}
