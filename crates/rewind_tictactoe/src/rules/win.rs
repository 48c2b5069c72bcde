//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Player, Square};

/// The 8 winning lines, scanned in this order.
///
/// When more than one line is complete the first one listed wins. Alternating
/// play can never complete two lines at once, but the order keeps the result
/// deterministic for arbitrary boards.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line: who owns it and which cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player owning all three cells.
    pub player: Player,
    /// Cell indices of the line, in table order.
    pub line: [usize; 3],
}

/// Checks if there is a winner on the board.
///
/// Returns the first line of [`LINES`] whose three cells hold the same player,
/// or `None` when no line is complete.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(Win {
                player,
                line: [a, b, c],
            })
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(
            check_winner(&board),
            Some(Win {
                player: Player::X,
                line: [0, 1, 2]
            })
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        let win = check_winner(&board).expect("diagonal win");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line, [0, 4, 8]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_table_order_wins() {
        // Top row and left column both complete; the row comes first.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert_eq!(check_winner(&board).map(|w| w.line), Some([0, 1, 2]));
    }
}
