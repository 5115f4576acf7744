//! Grid storage and the board that keeps it in step with the tiles.

use super::registry::TileRegistry;
use super::types::{Cell, SIZE, Tile, TileId};
use tracing::instrument;

/// One row or column, read in some orientation.
pub type Line = [Option<TileId>; SIZE];

/// SIZE×SIZE matrix of tile references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<TileId>; SIZE]; SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the occupant of a cell.
    pub fn cell(&self, cell: Cell) -> Option<TileId> {
        self.cells[cell.row][cell.col]
    }

    /// Returns row `row`, left to right.
    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    /// Returns column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Line {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|c| self.cell(*c).is_none()).collect()
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Occupied cells with their occupants, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, TileId)> + '_ {
        Cell::all().filter_map(|c| self.cell(c).map(|id| (c, id)))
    }

    fn write(&mut self, cell: Cell, occupant: Option<TileId>) {
        self.cells[cell.row][cell.col] = occupant;
    }
}

/// Grid plus tile registry.
///
/// All cell writes go through [`Board::set_cell`], which moves the tile's
/// stored coordinates along with the reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    tiles: TileRegistry,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the registry.
    pub fn tiles(&self) -> &TileRegistry {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut TileRegistry {
        &mut self.tiles
    }

    /// Writes a cell and updates the occupant's coordinates.
    pub fn set_cell(&mut self, cell: Cell, occupant: Option<TileId>) {
        self.grid.write(cell, occupant);
        if let Some(tile) = occupant.and_then(|id| self.tiles.get_mut(id)) {
            tile.row = cell.row;
            tile.col = cell.col;
        }
    }

    /// Creates a tile and places it.
    #[instrument(skip(self))]
    pub fn place_new(&mut self, cell: Cell, value: u32) -> TileId {
        let id = self.tiles.create(cell, value);
        self.set_cell(cell, Some(id));
        id
    }

    /// Returns the tile occupying a cell.
    pub fn tile_at(&self, cell: Cell) -> Option<&Tile> {
        self.grid.cell(cell).and_then(|id| self.tiles.get(id))
    }

    /// Returns the value in a cell.
    pub fn value_at(&self, cell: Cell) -> Option<u32> {
        self.tile_at(cell).map(|t| t.value)
    }

    /// Tiles referenced by the grid, row-major.
    pub fn live_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.grid.occupied().filter_map(|(_, id)| self.tiles.get(id))
    }

    /// Sum of the values on the grid.
    pub fn value_total(&self) -> u64 {
        self.live_tiles().map(|t| u64::from(t.value)).sum()
    }

    /// Largest value on the grid, 0 when empty.
    pub fn max_value(&self) -> u32 {
        self.live_tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// Empties the grid and the registry.
    pub fn clear(&mut self) {
        self.grid = Grid::new();
        self.tiles.reset();
    }

    /// Builds a board from a value matrix (0 is empty), ids assigned row-major.
    pub fn from_values(values: [[u32; SIZE]; SIZE]) -> Self {
        let mut board = Self::new();
        for cell in Cell::all() {
            let value = values[cell.row][cell.col];
            if value != 0 {
                board.place_new(cell, value);
            }
        }
        board
    }

    /// Value matrix of the grid, 0 for empty cells.
    pub fn values(&self) -> [[u32; SIZE]; SIZE] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| self.value_at(Cell::new(row, col)).unwrap_or(0))
        })
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        self.values()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| match v {
                        0 => format!("{:>5}", "."),
                        v => format!("{v:>5}"),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
