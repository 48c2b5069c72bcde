//! Keyboard input: cursor movement and key-to-event mapping.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at this cell index.
    CellClicked(usize),
    /// Play at the board cursor.
    PlayCursor,
    /// Jump to the entry under the history cursor.
    SelectHistory,
    /// Flip the move list order.
    ToggleOrder,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Move the focused cursor.
    Navigate(KeyCode),
    /// Leave the app.
    Quit,
    /// Key with no meaning.
    Ignore,
}

impl Action {
    /// Maps a key to an action given the focused pane.
    pub fn from_key(code: KeyCode, focus: Focus) -> Self {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') => Action::ToggleOrder,
            KeyCode::Tab | KeyCode::BackTab => Action::SwitchFocus,
            // Digits 1-9 name the cells in row-major order.
            KeyCode::Char(c @ '1'..='9') => Action::CellClicked(c as usize - '1' as usize),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Action::Navigate(code),
            KeyCode::Enter | KeyCode::Char(' ') => match focus {
                Focus::Board => Action::PlayCursor,
                Focus::History => Action::SelectHistory,
            },
            _ => Action::Ignore,
        }
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Moves a list cursor up or down within `len` rows.
pub fn move_list_cursor(cursor: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => cursor.saturating_sub(1),
        KeyCode::Down => (cursor + 1).min(len.saturating_sub(1)),
        _ => cursor,
    }
}
