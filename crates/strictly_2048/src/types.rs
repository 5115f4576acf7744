//! Core domain types for 2048.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the square grid.
pub const SIZE: usize = 4;

/// Unique tile identifier.
///
/// Identifiers are handed out in increasing order by the
/// [`TileRegistry`](crate::TileRegistry) and are never reused while
/// the tile timeline moves forward.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("#{}", _0)]
pub struct TileId(u32);

impl TileId {
    /// Wraps a raw identifier.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    pub fn get(self) -> u32 {
        self.0
    }
}

/// A coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Cell {
    /// Creates a cell coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) is off the grid");
        Self { row, col }
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Cell { row, col }))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction of a slide.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    /// Slide toward row 0.
    Up,
    /// Slide toward the last row.
    Down,
    /// Slide toward column 0.
    Left,
    /// Slide toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parses a direction token such as `"left"`.
    ///
    /// Unknown tokens yield `None`.
    #[instrument]
    pub fn from_token(token: &str) -> Option<Direction> {
        token.trim().parse().ok()
    }

    /// Whether lines are read against the grid's natural order.
    pub(crate) fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Whether lines are columns rather than rows.
    pub(crate) fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A numbered tile.
///
/// `row`/`col` always mirror the cell that references the tile; they are
/// only written through [`Board::set_cell`](crate::Board::set_cell) and by
/// the move engine when parking a consumed tile at its merge target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Identity, stable across moves.
    pub id: TileId,
    /// Face value, a power of two.
    pub value: u32,
    /// Current row.
    pub row: usize,
    /// Current column.
    pub col: usize,
    /// Spawned during the latest move.
    pub is_new: bool,
    /// Absorbed another tile during the latest move.
    pub merged: bool,
    /// Consumed by a merge, awaiting disposal.
    pub removing: bool,
    /// Output index of the tile that absorbed this one.
    pub merge_to: Option<usize>,
}

impl Tile {
    /// Creates a freshly spawned tile.
    pub fn new(id: TileId, cell: Cell, value: u32) -> Self {
        Self {
            id,
            value,
            row: cell.row,
            col: cell.col,
            is_new: true,
            merged: false,
            removing: false,
            merge_to: None,
        }
    }

    /// Returns the tile's cell.
    pub fn cell(&self) -> Cell {
        Cell {
            row: self.row,
            col: self.col,
        }
    }
}

/// Whether the game accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    Playing,
    /// No legal move remains; only continue or restart are accepted.
    Over,
}
