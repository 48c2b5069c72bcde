//! First-class invariants over [`GameState`].
//!
//! Invariants are logical properties that must hold after every operation.
//! They are checked in debug builds after each applied move and can be
//! tested independently.

use tracing::warn;

use crate::GameState;

pub mod empty_start;
pub mod single_cell_delta;
pub mod step_in_bounds;
pub mod turn_parity;

pub use empty_start::EmptyStartInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;
pub use turn_parity::TurnParityInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    EmptyStartInvariant,
    SingleCellDeltaInvariant,
    StepInBoundsInvariant,
    TurnParityInvariant,
);

/// Asserts every invariant in debug builds; logs violations first.
pub(crate) fn assert_invariants(game: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(%violation, "Invariant violated");
        }
        panic!("Game invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = GameState::replay([0, 4, 8, 2]);
        assert!(GameInvariants::check_all(&game).is_ok());
        game.jump_to(1);
        assert!(GameInvariants::check_all(&game).is_ok());
        game.apply_move(6);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::replay([4]);
        type TwoInvariants = (StepInBoundsInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_violations_are_collected() {
        struct AlwaysFails;
        impl Invariant<GameState> for AlwaysFails {
            fn holds(_: &GameState) -> bool {
                false
            }
            fn description() -> &'static str {
                "always fails"
            }
        }

        let game = GameState::new();
        let violations = <(AlwaysFails, StepInBoundsInvariant, AlwaysFails)>::check_all(&game)
            .expect_err("two violations");
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].to_string(), "always fails");
    }
}
