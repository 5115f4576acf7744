//! Strictly 2048 - pure tile-merge game logic
//!
//! A 4×4 sliding-tile engine: directional moves compact and merge lines,
//! spawns follow an escalating value curve, terminal states are detected,
//! and the move that ended a game can be rewound once.
//!
//! # Architecture
//!
//! - **Board**: grid of tile references plus the registry that owns tiles
//! - **Rules**: line resolution, spawn curve, game-over detection
//! - **Movement**: directional moves built on the line resolver
//! - **Snapshot**: one-level rewind
//! - **Game**: the session object collaborators drive
//! - **Contracts/Invariants**: debug-build verification of every move
//!
//! # Example
//!
//! ```
//! use strictly_2048::{Direction, Game};
//!
//! let mut game = Game::seeded(42);
//! let report = game.move_tiles(Direction::Left);
//! if report.moved {
//!     println!("Score: {}", game.score());
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod game;
mod grid;
pub mod invariants;
mod movement;
mod random;
mod registry;
pub mod rules;
mod snapshot;
mod types;

// Crate-level exports - Domain types
pub use types::{Cell, Direction, GameStatus, SIZE, Tile, TileId};

// Crate-level exports - Board storage
pub use grid::{Board, Grid, Line};
pub use registry::TileRegistry;

// Crate-level exports - Moves
pub use movement::{Shift, apply_move, can_move};

// Crate-level exports - Rewind
pub use snapshot::{Snapshot, TileRecord};

// Crate-level exports - Randomness
pub use random::{RandomSource, RngSource, ScriptedSource};

// Crate-level exports - Session
pub use game::{Game, MoveReport};

// Crate-level exports - Contracts
pub use contracts::{ContractViolation, MoveContract, assert_invariants};
