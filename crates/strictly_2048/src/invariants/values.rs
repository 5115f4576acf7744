//! Value invariant: tiles are powers of two.

use super::super::grid::Board;
use super::Invariant;

/// Invariant: every tile on the grid holds a power of two of at least 2.
pub struct PowerOfTwoInvariant;

impl Invariant<Board> for PowerOfTwoInvariant {
    fn holds(board: &Board) -> bool {
        board
            .live_tiles()
            .all(|t| t.value >= 2 && t.value.is_power_of_two())
    }

    fn description() -> &'static str {
        "Tile values are powers of two, at least 2"
    }
}
