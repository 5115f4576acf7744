//! One-level rewind of board, score and id counter.

use super::grid::Board;
use super::types::{Cell, SIZE, Tile, TileId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Flag-free copy of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    /// Tile identity.
    pub id: TileId,
    /// Row at capture time.
    pub row: usize,
    /// Column at capture time.
    pub col: usize,
    /// Face value.
    pub value: u32,
}

/// Immutable capture of the board taken just before a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Per-cell tile records.
    cells: [[Option<TileRecord>; SIZE]; SIZE],
    /// Score at capture time.
    score: u32,
    /// Id counter at capture time.
    last_id: u32,
}

impl Snapshot {
    /// Captures the board. Removed tiles awaiting disposal are not part of it.
    #[instrument(skip(board))]
    pub fn capture(board: &Board, score: u32) -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                board.tile_at(Cell::new(row, col)).map(|t| TileRecord {
                    id: t.id,
                    row: t.row,
                    col: t.col,
                    value: t.value,
                })
            })
        });
        Self {
            cells,
            score,
            last_id: board.tiles().last_id(),
        }
    }

    /// Rebuilds `board` from this snapshot and returns the captured score.
    ///
    /// Grid and registry are replaced wholesale; restored tiles carry no
    /// transient flags.
    #[instrument(skip(self, board), fields(score = self.score, last_id = self.last_id))]
    pub fn restore(&self, board: &mut Board) -> u32 {
        board.clear();
        let tiles = self.records().map(|record| Tile {
            id: record.id,
            value: record.value,
            row: record.row,
            col: record.col,
            is_new: false,
            merged: false,
            removing: false,
            merge_to: None,
        });
        board.tiles_mut().restore(self.last_id, tiles);
        for record in self.records() {
            board.set_cell(Cell::new(record.row, record.col), Some(record.id));
        }
        debug!(tiles = board.tiles().len(), "Snapshot restored");
        self.score
    }

    /// Captured tiles in row-major order.
    pub fn records(&self) -> impl Iterator<Item = &TileRecord> {
        self.cells.iter().flatten().flatten()
    }
}
