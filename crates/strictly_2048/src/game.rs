//! The game session: board, score, rewind point and RNG in one object.

use super::contracts::{MoveContract, assert_invariants};
use super::grid::Board;
use super::movement::{apply_move, can_move};
use super::random::{RandomSource, RngSource};
use super::rules::{is_game_over, spawn};
use super::snapshot::Snapshot;
use super::types::{Direction, GameStatus, Tile, TileId};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What a move request did.
///
/// The render collaborator reads this after every request. `removed` lists
/// tiles consumed by merges; they remain in the registry for the slide-in
/// animation until the collaborator hands them back to [`Game::dispose`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Requested direction, `None` for an unrecognized token.
    pub direction: Option<Direction>,
    /// The board changed.
    pub moved: bool,
    /// Points scored.
    pub gained: u32,
    /// Tiles consumed by merges.
    pub removed: Vec<TileId>,
    /// Tile spawned after the move.
    pub spawned: Option<TileId>,
    /// No legal move remains.
    pub game_over: bool,
}

impl MoveReport {
    fn unchanged(direction: Option<Direction>, game_over: bool) -> Self {
        Self {
            direction,
            moved: false,
            gained: 0,
            removed: Vec::new(),
            spawned: None,
            game_over,
        }
    }
}

/// A 2048 game session.
///
/// Owns all mutable game state; collaborators hold the session and call
/// into it rather than sharing globals. Randomness comes from `R`, so tests
/// can script every spawn.
///
/// Tiles consumed by a merge linger in the registry for the render
/// collaborator until it calls [`Game::dispose`]. Whatever it has not
/// disposed by the next committed move is swept then, so the registry never
/// holds more than the board plus one move's worth of consumed tiles.
#[derive(Debug, Clone)]
pub struct Game<R = RngSource<StdRng>> {
    board: Board,
    score: u32,
    move_count: u32,
    snapshot: Option<Snapshot>,
    status: GameStatus,
    rng: R,
}

impl Game<RngSource<StdRng>> {
    /// Starts a reproducible game from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a session and starts the first game.
    #[instrument(skip(rng))]
    pub fn new(rng: R) -> Self {
        let mut game = Self {
            board: Board::new(),
            score: 0,
            move_count: 0,
            snapshot: None,
            status: GameStatus::Playing,
            rng,
        };
        game.start_game();
        game
    }

    /// Creates a session around an existing board with zero score.
    ///
    /// Status reflects whether the board is already terminal.
    #[instrument(skip(board, rng))]
    pub fn with_board(board: Board, rng: R) -> Self {
        let status = if is_game_over(&board) {
            GameStatus::Over
        } else {
            GameStatus::Playing
        };
        Self {
            board,
            score: 0,
            move_count: 0,
            snapshot: None,
            status,
            rng,
        }
    }

    /// Resets to a fresh game with two spawned tiles.
    ///
    /// Score, move count and tile ids restart, and any rewind point is
    /// dropped.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        self.board.clear();
        self.score = 0;
        self.move_count = 0;
        self.snapshot = None;
        self.status = GameStatus::Playing;
        spawn(&mut self.board, self.move_count, &mut self.rng);
        spawn(&mut self.board, self.move_count, &mut self.rng);
        info!(board = %self.board.display(), "New game started");
    }

    /// Slides the board.
    ///
    /// Refused while the game is over. When nothing moves the session is
    /// left exactly as it was. Otherwise the pre-move state becomes the
    /// rewind point, consumed tiles left over from earlier moves are
    /// dropped, the gain is scored, one tile spawns and the terminal state
    /// is re-evaluated.
    #[instrument(skip(self), fields(move_count = self.move_count, score = self.score))]
    pub fn move_tiles(&mut self, direction: Direction) -> MoveReport {
        if let Err(refusal) = MoveContract::pre(self.status) {
            debug!(%refusal, "Move refused");
            return MoveReport::unchanged(Some(direction), self.is_over());
        }

        let mut next = self.board.clone();
        next.tiles_mut().sweep_removing();
        let shift = apply_move(&mut next, direction);
        if !shift.moved {
            debug!("Move changed nothing");
            return MoveReport::unchanged(Some(direction), false);
        }

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(self.board.value_total(), &next, &shift);
            debug_assert!(post.is_ok(), "Move postcondition failed: {post:?}");
        }

        self.snapshot = Some(Snapshot::capture(&self.board, self.score));
        self.board = next;
        self.move_count += 1;
        self.score += shift.gained;

        let spawned = spawn(&mut self.board, self.move_count, &mut self.rng);
        assert_invariants(&self.board);

        if is_game_over(&self.board) {
            self.status = GameStatus::Over;
            info!(score = self.score, moves = self.move_count, "Game over");
        }

        debug!(gained = shift.gained, score = self.score, "Move committed");
        MoveReport {
            direction: Some(direction),
            moved: true,
            gained: shift.gained,
            removed: shift.removed,
            spawned,
            game_over: self.is_over(),
        }
    }

    /// Slides the board from a direction token such as `"up"`.
    ///
    /// Unknown tokens change nothing.
    #[instrument(skip(self))]
    pub fn move_token(&mut self, token: &str) -> MoveReport {
        match Direction::from_token(token) {
            Some(direction) => self.move_tiles(direction),
            None => {
                debug!(token, "Unrecognized direction");
                MoveReport::unchanged(None, self.is_over())
            }
        }
    }

    /// Rewinds the move that ended the game.
    ///
    /// Only available while the game is over and a rewind point exists.
    /// Restores board, tile ids and score; the move count is kept. Returns
    /// whether the rewind happened.
    #[instrument(skip(self))]
    pub fn continue_from_game_over(&mut self) -> bool {
        if self.status != GameStatus::Over {
            debug!("Continue ignored, game still in play");
            return false;
        }
        let Some(snapshot) = self.snapshot.take() else {
            warn!("Continue requested without a rewind point");
            return false;
        };

        self.score = snapshot.restore(&mut self.board);
        self.status = GameStatus::Playing;
        assert_invariants(&self.board);
        info!(score = self.score, "Continued from the previous position");
        true
    }

    /// Drops tiles consumed by merges once their animation has finished.
    pub fn dispose(&mut self, ids: &[TileId]) -> usize {
        self.board.tiles_mut().dispose(ids)
    }

    /// Directions that would change the board.
    pub fn legal_directions(&self) -> Vec<Direction> {
        if self.is_over() {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|d| can_move(&self.board, *d))
            .collect()
    }
}

impl<R> Game<R> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every tile entity, including merged-away tiles awaiting disposal.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.board.tiles().tiles()
    }

    /// Returns the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of moves that changed the board.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether no legal move remains.
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Returns the rewind point, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Largest tile on the board.
    pub fn max_tile(&self) -> u32 {
        self.board.max_value()
    }
}
