//! Win detection over every line of the table.

use rewind_tictactoe::{Board, LINES, Player, Position, Square, Win, check_winner};

fn board_with(marks: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(index, player) in marks {
        board.set(Position::from_index(index).unwrap(), Square::Occupied(player));
    }
    board
}

#[test]
fn test_every_line_is_detected_for_both_players() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let board = board_with(&line.map(|i| (i, player)));
            assert_eq!(
                check_winner(&board),
                Some(Win { player, line }),
                "line {line:?} for {player}"
            );
        }
    }
}

#[test]
fn test_line_with_opponent_noise_still_detected() {
    // O owns the middle column; X scattered elsewhere without a line.
    let board = board_with(&[
        (1, Player::O),
        (4, Player::O),
        (7, Player::O),
        (0, Player::X),
        (5, Player::X),
        (6, Player::X),
    ]);
    assert_eq!(
        check_winner(&board),
        Some(Win {
            player: Player::O,
            line: [1, 4, 7]
        })
    );
}

#[test]
fn test_two_of_three_on_every_line_is_not_a_win() {
    for [a, b, _] in LINES {
        let board = board_with(&[(a, Player::X), (b, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }
}

#[test]
fn test_full_board_without_line() {
    // X O X / X O O / O X X
    let board = board_with(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::X),
        (4, Player::O),
        (5, Player::O),
        (6, Player::O),
        (7, Player::X),
        (8, Player::X),
    ]);
    assert_eq!(check_winner(&board), None);
    assert!(rewind_tictactoe::rules::is_draw(&board));
}
