//! Game rules for 2048.
//!
//! Pure functions over the board: how a line collapses, when the game is
//! over, and what gets spawned. Kept apart from board storage so the move
//! engine and the contracts can share them.

pub mod game_over;
pub mod line;
pub mod spawn;

pub use game_over::is_game_over;
pub use line::{LineResolution, resolve_line};
pub use spawn::{SPAWN_CURVE, SpawnBand, band_for, spawn, spawn_value};
