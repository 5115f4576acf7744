//! Coordinate invariant: a tile's stored position matches its cell.

use super::super::grid::Board;
use super::Invariant;

/// Invariant: every referenced tile stores the coordinates of its cell.
pub struct CoordinatesInSyncInvariant;

impl Invariant<Board> for CoordinatesInSyncInvariant {
    fn holds(board: &Board) -> bool {
        board
            .grid()
            .occupied()
            .all(|(cell, id)| board.tiles().get(id).is_some_and(|t| t.cell() == cell))
    }

    fn description() -> &'static str {
        "Tile coordinates match the cell referencing them"
    }
}
