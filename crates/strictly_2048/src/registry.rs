//! Tile ownership and identifier allocation.

use super::types::{Cell, Tile, TileId};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Owns every tile entity and hands out identifiers.
///
/// The grid only holds [`TileId`]s; the registry is where the tiles
/// themselves live. Tiles consumed by a merge stay here, flagged
/// `removing`, until [`TileRegistry::dispose`] is called for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileRegistry {
    tiles: BTreeMap<TileId, Tile>,
    last_id: u32,
}

impl TileRegistry {
    /// Creates an empty registry whose first tile will be `#1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next identifier and stores a new tile.
    #[instrument(skip(self), fields(last_id = self.last_id))]
    pub fn create(&mut self, cell: Cell, value: u32) -> TileId {
        self.last_id += 1;
        let id = TileId::new(self.last_id);
        self.tiles.insert(id, Tile::new(id, cell, value));
        debug!(%id, %cell, value, "Tile created");
        id
    }

    /// Looks up a tile.
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Looks up a tile for mutation.
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(&id)
    }

    /// Every tile entity in id order, including ones awaiting disposal.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Number of tile entities held.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the registry holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The most recently allocated identifier (0 before any allocation).
    pub fn last_id(&self) -> u32 {
        self.last_id
    }

    /// Clears `is_new` and `merged` on every tile still in play.
    pub fn clear_transient_flags(&mut self) {
        for tile in self.tiles.values_mut().filter(|t| !t.removing) {
            tile.is_new = false;
            tile.merged = false;
        }
    }

    /// Drops tiles that were consumed by a merge.
    ///
    /// Ids that are unknown, or whose tile is no longer flagged `removing`,
    /// are left alone. Returns how many tiles were dropped.
    #[instrument(skip(self, ids))]
    pub fn dispose(&mut self, ids: &[TileId]) -> usize {
        let mut dropped = 0;
        for id in ids {
            if self.tiles.get(id).is_some_and(|t| t.removing) {
                self.tiles.remove(id);
                dropped += 1;
            }
        }
        debug!(requested = ids.len(), dropped, "Disposed merged tiles");
        dropped
    }

    /// Drops every tile still flagged `removing`. Returns how many went.
    #[instrument(skip(self))]
    pub fn sweep_removing(&mut self) -> usize {
        let before = self.tiles.len();
        self.tiles.retain(|_, t| !t.removing);
        let swept = before - self.tiles.len();
        if swept > 0 {
            debug!(swept, "Swept undisposed tiles");
        }
        swept
    }

    /// Forgets every tile and restarts identifiers at `#1`.
    pub fn reset(&mut self) {
        self.tiles.clear();
        self.last_id = 0;
    }

    /// Replaces the registry contents wholesale.
    pub(crate) fn restore(&mut self, last_id: u32, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles = tiles.into_iter().map(|t| (t.id, t)).collect();
        self.last_id = last_id;
    }
}
