//! Single-line compaction and merging.

use super::super::grid::Line;
use super::super::registry::TileRegistry;
use super::super::types::{SIZE, TileId};
use tracing::{instrument, trace};

/// Outcome of resolving one line toward index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResolution {
    /// Survivors packed toward index 0, trailing slots empty.
    pub result: Line,
    /// Points scored by merges in this line.
    pub gained: u32,
    /// Tiles absorbed by a merge, in line order.
    pub removed: Vec<TileId>,
}

/// Compacts and merges a line toward index 0.
///
/// Empty slots are stripped first. Adjacent equal pairs merge once: the
/// leading tile doubles in place and is marked `merged`, the trailing tile
/// is marked `removing` with `merge_to` set to the leading tile's output
/// index. A tile produced by a merge never merges again in the same pass,
/// so `[2, 2, 2, 2]` gives `[4, 4]` and `[2, 2, 4]` gives `[4, 4]`.
#[instrument(skip(registry))]
pub fn resolve_line(line: Line, registry: &mut TileRegistry) -> LineResolution {
    let packed: Vec<(TileId, u32)> = line
        .iter()
        .flatten()
        .filter_map(|id| registry.get(*id).map(|t| (*id, t.value)))
        .collect();

    let mut result: Line = [None; SIZE];
    let mut len = 0;
    let mut gained = 0;
    let mut removed = Vec::new();

    let mut i = 0;
    while i < packed.len() {
        let (current, value) = packed[i];
        match packed.get(i + 1) {
            Some(&(next, next_value)) if next_value == value => {
                let doubled = value * 2;
                if let Some(tile) = registry.get_mut(current) {
                    tile.value = doubled;
                    tile.merged = true;
                }
                if let Some(tile) = registry.get_mut(next) {
                    tile.removing = true;
                    tile.merge_to = Some(len);
                }
                trace!(%current, %next, doubled, index = len, "Merged pair");
                gained += doubled;
                removed.push(next);
                i += 2;
            }
            _ => i += 1,
        }
        result[len] = Some(current);
        len += 1;
    }

    LineResolution {
        result,
        gained,
        removed,
    }
}
