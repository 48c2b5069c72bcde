//! Turn invariant: X moves on even steps.

use super::Invariant;
use crate::GameState;

/// Invariant: `x_is_next == (current_step % 2 == 0)`.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(game: &GameState) -> bool {
        game.x_is_next() == (game.current_step() % 2 == 0)
    }

    fn description() -> &'static str {
        "Next player follows step parity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_across_jumps() {
        let mut game = GameState::replay([0, 4, 8]);
        for step in [3, 0, 1, 2] {
            game.jump_to(step);
            assert!(TurnParityInvariant::holds(&game), "step {step}");
        }
    }

    #[test]
    fn test_toggle_order_does_not_disturb_turn() {
        let mut game = GameState::replay([0]);
        game.toggle_display_order();
        assert!(TurnParityInvariant::holds(&game));
    }
}
