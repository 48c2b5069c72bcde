//! Monotonic history: each snapshot adds exactly one mark to its parent.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: `history[i]` differs from `history[i-1]` in exactly one cell.
///
/// That cell was empty before, now holds the mark of the player who moves on
/// step `i` (X on odd steps), and is the cell named by the entry's coordinate.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .entries()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let step = i + 1;
                let (before, after) = (pair[0].board(), pair[1].board());
                let changed: Vec<usize> = (0..9)
                    .filter(|&idx| before.squares()[idx] != after.squares()[idx])
                    .collect();
                let [idx] = changed.as_slice() else {
                    return false;
                };
                let mover = if step % 2 == 1 { Player::X } else { Player::O };
                before.squares()[*idx] == Square::Empty
                    && after.squares()[*idx] == Square::Occupied(mover)
                    && pair[1]
                        .coordinate()
                        .and_then(|c| c.position())
                        .is_some_and(|pos| pos.to_index() == *idx)
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark, at its recorded coordinate"
    }
}
