//! Terminal-state detection.

use super::super::grid::Board;
use super::super::types::{Cell, SIZE};
use tracing::instrument;

/// Checks whether no move can change the board.
///
/// Any empty cell means play continues. On a full board, every adjacent
/// pair is the right or down neighbour of exactly one member, so those two
/// checks cover all merges.
#[instrument(skip(board))]
pub fn is_game_over(board: &Board) -> bool {
    if !board.grid().is_full() {
        return false;
    }

    !Cell::all().any(|cell| {
        let value = board.value_at(cell);
        let right = (cell.col + 1 < SIZE)
            .then(|| board.value_at(Cell::new(cell.row, cell.col + 1)))
            .flatten();
        let down = (cell.row + 1 < SIZE)
            .then(|| board.value_at(Cell::new(cell.row + 1, cell.col)))
            .flatten();
        right == value || down == value
    })
}
