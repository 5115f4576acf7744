//! Tile spawning under an escalating value curve.

use super::super::grid::Board;
use super::super::random::RandomSource;
use super::super::types::TileId;
use tracing::{debug, instrument};

/// One band of the spawn curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnBand {
    /// Band applies while the move count is below this bound.
    pub below: u32,
    /// More likely value.
    pub first: u32,
    /// Probability of `first`.
    pub first_chance: f64,
    /// Value chosen otherwise.
    pub second: u32,
}

/// Spawn curve keyed by successful move count, half-open bands.
///
/// Spawns skew toward larger values as the game goes on.
pub const SPAWN_CURVE: [SpawnBand; 6] = [
    SpawnBand {
        below: 6,
        first: 2,
        first_chance: 0.85,
        second: 4,
    },
    SpawnBand {
        below: 14,
        first: 2,
        first_chance: 0.65,
        second: 4,
    },
    SpawnBand {
        below: 24,
        first: 2,
        first_chance: 0.40,
        second: 4,
    },
    SpawnBand {
        below: 36,
        first: 4,
        first_chance: 0.60,
        second: 8,
    },
    SpawnBand {
        below: 50,
        first: 4,
        first_chance: 0.50,
        second: 8,
    },
    SpawnBand {
        below: u32::MAX,
        first: 8,
        first_chance: 0.70,
        second: 16,
    },
];

/// Returns the band governing `move_count`.
pub fn band_for(move_count: u32) -> &'static SpawnBand {
    SPAWN_CURVE
        .iter()
        .find(|band| move_count < band.below)
        .unwrap_or(&SPAWN_CURVE[SPAWN_CURVE.len() - 1])
}

/// Picks a spawn value given a uniform `roll` in `[0, 1)`.
pub fn spawn_value(move_count: u32, roll: f64) -> u32 {
    let band = band_for(move_count);
    if roll < band.first_chance {
        band.first
    } else {
        band.second
    }
}

/// Places one tile in a uniformly chosen empty cell.
///
/// Returns `None` without touching the board when no cell is empty.
#[instrument(skip(board, rng))]
pub fn spawn<R: RandomSource + ?Sized>(
    board: &mut Board,
    move_count: u32,
    rng: &mut R,
) -> Option<TileId> {
    let empty = board.grid().empty_cells();
    if empty.is_empty() {
        debug!("No empty cell, spawn skipped");
        return None;
    }

    let cell = empty[rng.index(empty.len())];
    let value = spawn_value(move_count, rng.unit());
    let id = board.place_new(cell, value);
    debug!(%id, %cell, value, "Spawned tile");
    Some(id)
}
