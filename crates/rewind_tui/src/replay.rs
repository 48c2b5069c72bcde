//! Non-interactive replay: apply moves, print the resulting view.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameState, GameView, Square};
use tracing::{debug, info, instrument};

use crate::cli::OutputFormat;

/// Builds the game described by the `replay` arguments.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn build_game(moves: &[usize], jump: Option<usize>, reversed: bool) -> GameState {
    let mut game = GameState::new();
    for &index in moves {
        if !game.apply_move(index) {
            debug!(index, "Skipped rejected move");
        }
    }
    if let Some(step) = jump {
        game.jump_to(step);
    }
    if reversed {
        game.toggle_display_order();
    }
    info!(step = game.current_step(), status = %game.status(), "Replay built");
    game
}

/// Renders a view as plain text.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    for row in view.board().chunks(3) {
        let cells: Vec<&str> = row
            .iter()
            .map(|square| match square {
                Square::Empty => ".",
                occupied => occupied.symbol(),
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(view.status());
    out.push('\n');
    if !view.winning_line().is_empty() {
        let line: Vec<String> = view.winning_line().iter().map(|i| i.to_string()).collect();
        out.push_str(&format!("Winning line: {}\n", line.join(",")));
    }
    out.push('\n');
    for entry in view.ordered_moves() {
        let marker = if entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step(), entry.label()));
    }
    out
}

/// Renders a view in the requested format.
pub fn render(view: &GameView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).context("Failed to serialize view")
        }
    }
}
