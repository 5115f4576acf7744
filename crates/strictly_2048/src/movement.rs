//! Directional moves over the whole board.
//!
//! Every direction is reduced to the leftward line resolver: rows or
//! columns are read in the direction of travel, resolved toward index 0,
//! and written back in grid order.

use super::grid::{Board, Line};
use super::rules::resolve_line;
use super::types::{Cell, Direction, SIZE, TileId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of sliding the board once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Some cell changed occupant.
    pub moved: bool,
    /// Points scored by merges.
    pub gained: u32,
    /// Tiles consumed by merges, parked at their merge target.
    pub removed: Vec<TileId>,
}

/// Reads line `index` in the direction of travel.
fn read_line(board: &Board, direction: Direction, index: usize) -> Line {
    let mut line = if direction.is_vertical() {
        board.grid().column(index)
    } else {
        board.grid().row(index)
    };
    if direction.is_reversed() {
        line.reverse();
    }
    line
}

/// Grid cell for position `offset` along line `index`, in grid order.
fn cell_on_line(direction: Direction, index: usize, offset: usize) -> Cell {
    if direction.is_vertical() {
        Cell::new(offset, index)
    } else {
        Cell::new(index, offset)
    }
}

/// Slides and merges every line of the board in `direction`.
///
/// `is_new` and `merged` flags from the previous move are cleared first.
/// Surviving tiles keep their ids. Consumed tiles leave the grid but stay in
/// the registry flagged `removing`, with their coordinates set to the cell
/// of the tile that absorbed them.
#[instrument(skip(board))]
pub fn apply_move(board: &mut Board, direction: Direction) -> Shift {
    board.tiles_mut().clear_transient_flags();
    let mut shift = Shift::default();

    for index in 0..SIZE {
        let original = read_line(board, direction, index);
        let resolution = resolve_line(original, board.tiles_mut());

        let mut finished = resolution.result;
        let mut before = original;
        if direction.is_reversed() {
            finished.reverse();
            before.reverse();
        }

        for offset in 0..SIZE {
            if before[offset] != finished[offset] {
                shift.moved = true;
            }
            board.set_cell(cell_on_line(direction, index, offset), finished[offset]);
        }

        for id in &resolution.removed {
            if let Some(tile) = board.tiles_mut().get_mut(*id) {
                let target = tile.merge_to.unwrap_or_default();
                let offset = if direction.is_reversed() {
                    SIZE - 1 - target
                } else {
                    target
                };
                let cell = cell_on_line(direction, index, offset);
                tile.row = cell.row;
                tile.col = cell.col;
            }
        }

        shift.gained += resolution.gained;
        shift.removed.extend(resolution.removed);
    }

    debug!(
        moved = shift.moved,
        gained = shift.gained,
        removed = shift.removed.len(),
        "Move applied"
    );
    shift
}

/// Whether sliding in `direction` would change the board.
///
/// Works on a scratch copy; `board` is untouched.
#[instrument(skip(board))]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    let mut scratch = board.clone();
    apply_move(&mut scratch, direction).moved
}
