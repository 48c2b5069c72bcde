//! Tic-tac-toe with time travel.
//!
//! Every move is recorded as an immutable board snapshot. Any snapshot can be
//! revisited with [`GameState::jump_to`]; playing a move from an earlier
//! snapshot discards the snapshots that came after it.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//! assert_eq!(game.view().winning_line(), &vec![0, 1, 2]);
//!
//! // Rewind two moves and branch.
//! game.jump_to(3);
//! game.apply_move(8);
//! assert_eq!(game.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::MoveError;
pub use game::{GameState, GameStatus, Phase};
pub use history::{History, HistoryEntry};
pub use position::{Coordinate, Position};
pub use rules::{LINES, Win, check_winner};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveDescriptor, START_LABEL};
