//! Game state with time travel over the move history.
//!
//! [`GameState`] owns the history, the step being viewed, whose turn it is
//! and how the move list should be ordered. Status, phase and the winning
//! line are never stored; they are derived from the viewed snapshot on each
//! call, so jumping around the history cannot leave them stale.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::MoveError;
use crate::history::{History, HistoryEntry};
use crate::invariants::assert_invariants;
use crate::rules::{Win, check_winner, is_full};
use crate::{Board, Player, Position, Square};

/// Phase of the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves can still be made.
    InProgress,
    /// A line is complete.
    Won(Player),
    /// Nine moves were made and no line is complete.
    Drawn,
}

/// Status line shown to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player has completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// All nine moves made without a winner.
    #[display("Game draw")]
    Draw,
    /// Game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Complete game state: history, viewed step, turn and list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// Every snapshot recorded so far, including any redo tail.
    history: History,
    /// Index into `history` of the snapshot being viewed and played from.
    #[getter(copy)]
    current_step: usize,
    /// Whether X plays the next move.
    #[getter(copy)]
    x_is_next: bool,
    /// Whether the move list is presented newest first.
    #[getter(copy)]
    display_reversed: bool,
}

impl GameState {
    /// Creates a new game at the empty start board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            x_is_next: true,
            display_reversed: false,
        }
    }

    /// Builds a game by applying cell indices in order.
    ///
    /// Rejected indices are skipped exactly as [`GameState::apply_move`] would.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut game = Self::new();
        for index in indices {
            game.apply_move(index);
        }
        game
    }

    /// The snapshot being viewed.
    pub fn current_entry(&self) -> &HistoryEntry {
        // current_step is kept in bounds by every mutation.
        &self.history.entries()[self.current_step]
    }

    /// Board of the snapshot being viewed.
    pub fn current_board(&self) -> Board {
        self.current_entry().board()
    }

    /// The player who moves next.
    pub fn next_player(&self) -> Player {
        Player::from_x_is_next(self.x_is_next)
    }

    /// Number of entries after the viewed step that a new move would discard.
    pub fn redo_len(&self) -> usize {
        self.history.last_step() - self.current_step
    }

    /// The completed line on the viewed board, if any.
    pub fn winner(&self) -> Option<Win> {
        check_winner(&self.current_board())
    }

    /// Phase of the viewed snapshot.
    pub fn phase(&self) -> Phase {
        match self.winner() {
            Some(win) => Phase::Won(win.player),
            None if self.current_step == Board::CELLS => Phase::Drawn,
            None => Phase::InProgress,
        }
    }

    /// Status of the viewed snapshot.
    pub fn status(&self) -> GameStatus {
        match self.phase() {
            Phase::Won(player) => GameStatus::Winner(player),
            Phase::Drawn => GameStatus::Draw,
            Phase::InProgress => GameStatus::NextPlayer(self.next_player()),
        }
    }

    /// Plays the next player's mark at `index`.
    ///
    /// Out-of-range indices, occupied cells and moves on a finished board are
    /// ignored. Returns whether the move was applied.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        match self.try_apply_move(index) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                false
            }
        }
    }

    /// Checked form of [`GameState::apply_move`].
    ///
    /// On success returns the phase of the new snapshot.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<Phase, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        let mut board = self.current_board();
        if check_winner(&board).is_some() || is_full(&board) {
            return Err(MoveError::GameOver);
        }
        if let Square::Occupied(owner) = board.get(pos) {
            return Err(MoveError::SquareOccupied(pos, owner));
        }

        let player = self.next_player();
        board.set(pos, Square::Occupied(player));
        self.current_step = self
            .history
            .branch(self.current_step, HistoryEntry::after_move(board, pos.coordinate()));
        self.x_is_next = !self.x_is_next;

        assert_invariants(self);

        let phase = self.phase();
        match phase {
            Phase::Won(winner) => info!(%winner, step = self.current_step, "Game won"),
            Phase::Drawn => info!(step = self.current_step, "Game drawn"),
            Phase::InProgress => debug!(position = %pos, step = self.current_step, "Move applied"),
        }
        Ok(phase)
    }

    /// Views the snapshot at `step`. Out-of-range steps are ignored.
    ///
    /// History is left intact, so jumping forward again is possible until the
    /// next move is applied. Returns whether the jump happened.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        match self.try_jump_to(step) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Jump ignored");
                false
            }
        }
    }

    /// Checked form of [`GameState::jump_to`].
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, redo = self.redo_len(), "Jumped");
        Ok(())
    }

    /// Flips the presentation order of the move list.
    #[instrument(skip(self))]
    pub fn toggle_display_order(&mut self) {
        self.display_reversed = !self.display_reversed;
        debug!(reversed = self.display_reversed, "Display order toggled");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert!(game.x_is_next());
        assert!(!game.display_reversed());
        assert_eq!(game.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_moves_alternate() {
        let mut game = GameState::new();
        assert!(game.apply_move(4));
        assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert!(game.apply_move(0));
        assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_try_apply_move_reports_reason() {
        let mut game = GameState::new();
        assert_eq!(game.try_apply_move(9), Err(MoveError::OutOfBounds(9)));
        game.apply_move(4);
        assert_eq!(
            game.try_apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center, Player::X))
        );
    }

    #[test]
    fn test_try_jump_to_reports_reason() {
        let mut game = GameState::new();
        assert_eq!(
            game.try_jump_to(1),
            Err(MoveError::StepOutOfRange { step: 1, len: 1 })
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "Game draw");
        assert_eq!(GameStatus::NextPlayer(Player::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_redo_len() {
        let mut game = GameState::replay([0, 4, 8]);
        assert_eq!(game.redo_len(), 0);
        game.jump_to(1);
        assert_eq!(game.redo_len(), 2);
    }
}
