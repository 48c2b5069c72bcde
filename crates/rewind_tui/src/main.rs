//! Rewind - tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tui::{Cli, Command, Settings, TerminalViewport, logging, play, replay};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(settings.log_file(), settings.log_filter())?;
            info!(config = %cli.config.display(), "Starting rewind");
            play::run(&settings, &TerminalViewport)
        }
        Command::Replay {
            moves,
            jump,
            reversed,
            format,
        } => {
            logging::init_stderr(settings.log_filter());
            let game = replay::build_game(&moves, jump, reversed);
            println!("{}", replay::render(&game.view(), format)?);
            Ok(())
        }
    }
}
