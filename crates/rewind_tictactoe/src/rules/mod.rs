//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. They hold no
//! state, so the game can re-run them on every snapshot it displays.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, check_winner};
