//! Contract-based validation for moves.
//!
//! Contracts formalize the Hoare-style reasoning around a move:
//! {P} slide {Q}. Preconditions are checked on every move, postconditions
//! in debug builds.

use super::grid::Board;
use super::invariants::{BoardInvariants, InvariantSet};
use super::movement::Shift;
use super::types::GameStatus;
use tracing::{instrument, warn};

/// A broken move contract.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ContractViolation {
    /// The game has ended; only continue or restart are accepted.
    #[display("Game is already over")]
    GameOver,

    /// Sliding changed the value total on the grid.
    #[display("Value total {} after move, expected {}", after, before)]
    ValueNotConserved {
        /// Total before the move.
        before: u64,
        /// Total after the move.
        after: u64,
    },

    /// The reported gain differs from the merged tiles' values.
    #[display("Gain {} reported, merged tiles sum to {}", gained, merged)]
    GainMismatch {
        /// Sum of merged tile values.
        merged: u64,
        /// Reported gain.
        gained: u32,
    },

    /// A board invariant failed after the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ContractViolation {}

/// Precondition: the game must still accept moves.
pub struct GameInPlay;

impl GameInPlay {
    /// Checks the precondition.
    #[instrument]
    pub fn check(status: GameStatus) -> Result<(), ContractViolation> {
        match status {
            GameStatus::Playing => Ok(()),
            GameStatus::Over => Err(ContractViolation::GameOver),
        }
    }
}

/// Postcondition: a slide conserves the value total on the grid.
///
/// Two tiles of value `v` become one tile of `2v`; the gain is scored, not
/// added to the board. Only the spawn that follows adds value.
pub struct ValueConserved;

impl ValueConserved {
    /// Checks the postcondition against the total captured before the slide.
    #[instrument(skip(after))]
    pub fn check(before: u64, after: &Board) -> Result<(), ContractViolation> {
        let after_total = after.value_total();
        if after_total == before {
            Ok(())
        } else {
            warn!(before, after_total, "Value conservation violated");
            Err(ContractViolation::ValueNotConserved {
                before,
                after: after_total,
            })
        }
    }
}

/// Postcondition: the gain equals the sum of the tiles produced by merges.
pub struct GainMatchesMerges;

impl GainMatchesMerges {
    /// Checks the postcondition.
    #[instrument(skip(after, shift))]
    pub fn check(after: &Board, shift: &Shift) -> Result<(), ContractViolation> {
        let merged: u64 = after
            .live_tiles()
            .filter(|t| t.merged)
            .map(|t| u64::from(t.value))
            .sum();
        if merged == u64::from(shift.gained) {
            Ok(())
        } else {
            warn!(merged, gained = shift.gained, "Gain does not match merges");
            Err(ContractViolation::GainMismatch {
                merged,
                gained: shift.gained,
            })
        }
    }
}

/// Contract for slides.
///
/// Preconditions:
/// - Game is in play
///
/// Postconditions:
/// - Value total on the grid is unchanged
/// - Gain is the sum of the merged values
/// - Board invariants hold
pub struct MoveContract;

impl MoveContract {
    /// Checks preconditions before sliding.
    pub fn pre(status: GameStatus) -> Result<(), ContractViolation> {
        GameInPlay::check(status)
    }

    /// Checks postconditions after sliding, before any spawn.
    pub fn post(before_total: u64, after: &Board, shift: &Shift) -> Result<(), ContractViolation> {
        ValueConserved::check(before_total, after)?;
        GainMatchesMerges::check(after, shift)?;
        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all board invariants hold (panics on violation in debug builds).
#[instrument(skip(board))]
pub fn assert_invariants(board: &Board) {
    debug_assert!(
        BoardInvariants::check_all(board).is_ok(),
        "Board invariants violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::apply_move;
    use crate::types::{Cell, Direction};

    #[test]
    fn test_precondition_rejects_finished_game() {
        assert!(MoveContract::pre(GameStatus::Playing).is_ok());
        assert_eq!(
            MoveContract::pre(GameStatus::Over),
            Err(ContractViolation::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut board = Board::from_values([[2, 2, 4, 4], [8, 0, 8, 0], [0; 4], [0; 4]]);
        let before = board.value_total();
        let shift = apply_move(&mut board, Direction::Left);
        assert_eq!(shift.gained, 4 + 8 + 16);
        assert!(MoveContract::post(before, &board, &shift).is_ok());
    }

    #[test]
    fn test_postcondition_detects_lost_value() {
        let mut board = Board::from_values([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = board.value_total();
        let shift = apply_move(&mut board, Direction::Left);

        // Drop the merged tile from the grid.
        board.set_cell(Cell::new(0, 0), None);

        assert!(matches!(
            MoveContract::post(before, &board, &shift),
            Err(ContractViolation::ValueNotConserved { .. })
        ));
    }
}
