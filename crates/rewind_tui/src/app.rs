//! Application state: one game plus the cursors used to drive it.
//!
//! The app is the adapter between key presses and [`GameState`]. Every event
//! that changes the game re-derives the cached [`GameView`], and the renderer
//! only ever reads that view.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use rewind_tictactoe::{GameState, GameView, Position};
use tracing::{debug, instrument};

use crate::input::{Action, Focus, move_cursor, move_list_cursor};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    #[getter(skip)]
    game: GameState,
    /// View derived from the game after the last change.
    view: GameView,
    /// Board cell under the cursor.
    #[getter(copy)]
    cursor: Position,
    /// Row of the move list under the cursor, in presentation order.
    #[getter(copy)]
    history_cursor: usize,
    /// Pane receiving arrows and Enter.
    #[getter(copy)]
    focus: Focus,
    /// Set once the player asks to leave.
    #[getter(copy)]
    should_quit: bool,
}

impl App {
    /// Creates an app around a fresh game.
    #[instrument]
    pub fn new(start_reversed: bool) -> Self {
        let mut game = GameState::new();
        if start_reversed {
            game.toggle_display_order();
        }
        Self::with_game(game)
    }

    /// Creates an app around an existing game.
    pub fn with_game(game: GameState) -> Self {
        let view = game.view();
        let mut app = Self {
            game,
            view,
            cursor: Position::Center,
            history_cursor: 0,
            focus: Focus::Board,
            should_quit: false,
        };
        app.history_cursor = app.row_of_step(app.game.current_step());
        app
    }

    /// The underlying game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, code: KeyCode) {
        let action = Action::from_key(code, self.focus);
        debug!(?action, "Key mapped");
        match action {
            Action::CellClicked(index) => self.cell_clicked(index),
            Action::PlayCursor => self.cell_clicked(self.cursor.to_index()),
            Action::SelectHistory => {
                if let Some(step) = self.step_at_row(self.history_cursor) {
                    self.history_entry_selected(step);
                }
            }
            Action::ToggleOrder => self.toggle_order_requested(),
            Action::SwitchFocus => self.focus = self.focus.toggle(),
            Action::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => {
                    self.history_cursor =
                        move_list_cursor(self.history_cursor, self.view.moves().len(), key)
                }
            },
            Action::Quit => self.should_quit = true,
            Action::Ignore => {}
        }
    }

    /// A board cell was chosen.
    #[instrument(skip(self))]
    pub fn cell_clicked(&mut self, index: usize) {
        if self.game.apply_move(index) {
            self.refresh();
            self.history_cursor = self.row_of_step(self.game.current_step());
        }
    }

    /// A move-list entry was chosen.
    #[instrument(skip(self))]
    pub fn history_entry_selected(&mut self, step: usize) {
        if self.game.jump_to(step) {
            self.refresh();
        }
    }

    /// The order toggle was pressed. The list cursor stays on the same entry.
    #[instrument(skip(self))]
    pub fn toggle_order_requested(&mut self) {
        let step = self.step_at_row(self.history_cursor);
        self.game.toggle_display_order();
        self.refresh();
        if let Some(step) = step {
            self.history_cursor = self.row_of_step(step);
        }
    }

    fn refresh(&mut self) {
        self.view = self.game.view();
        debug!(status = %self.view.status(), "View refreshed");
    }

    fn step_at_row(&self, row: usize) -> Option<usize> {
        self.view.ordered_moves().get(row).map(|m| m.step())
    }

    fn row_of_step(&self, step: usize) -> usize {
        self.view
            .ordered_moves()
            .iter()
            .position(|m| m.step() == step)
            .unwrap_or(0)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(false)
    }
}
