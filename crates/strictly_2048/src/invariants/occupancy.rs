//! Occupancy invariant: each live tile sits in exactly one cell.

use super::super::grid::Board;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: no tile is referenced twice, and referenced tiles are live.
///
/// A tile flagged `removing` has been consumed by a merge and must no
/// longer appear on the grid.
pub struct UniqueOccupancyInvariant;

impl Invariant<Board> for UniqueOccupancyInvariant {
    fn holds(board: &Board) -> bool {
        let mut seen = HashSet::new();
        board.grid().occupied().all(|(_, id)| {
            seen.insert(id) && board.tiles().get(id).is_some_and(|t| !t.removing)
        })
    }

    fn description() -> &'static str {
        "Each grid reference points at a distinct live tile"
    }
}
