//! Terminal front end for rewind tic-tac-toe.
//!
//! - **cli**: command-line arguments
//! - **config**: settings file
//! - **app**: adapter between key presses and the game state
//! - **ui**: rendering of the derived view
//! - **viewport**: terminal size provider and layout choice
//! - **replay**: non-interactive mode

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod play;
pub mod replay;
pub mod ui;
pub mod viewport;

pub use app::App;
pub use cli::{Cli, Command, OutputFormat};
pub use config::{ConfigError, Settings};
pub use viewport::{FixedViewport, LayoutMode, TerminalViewport, ViewportSize};
