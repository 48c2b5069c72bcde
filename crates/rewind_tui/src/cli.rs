//! Command-line interface for rewind.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can travel through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (optional; defaults apply when missing)
    #[arg(long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply moves without a terminal and print the resulting view
    Replay {
        /// Cell indices (0-8, row-major) in play order; invalid moves are skipped
        #[arg(required = true)]
        moves: Vec<usize>,

        /// History step to view after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        reversed: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the view.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    Text,
    /// The view as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "rewind", "replay", "0", "4", "1", "--jump", "2", "--reversed", "--format", "json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 4, 1],
                jump: Some(2),
                reversed: true,
                format: OutputFormat::Json,
            })
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["rewind", "replay"]).is_err());
    }

    #[test]
    fn test_clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
