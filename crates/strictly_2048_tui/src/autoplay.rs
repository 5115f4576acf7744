//! Headless games driven by a simple move policy.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_new::new;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_2048::{Direction, Game};
use tracing::{debug, info, instrument};

/// How the autoplayer picks its next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Policy {
    /// Left, Down, Right, Up in turn, skipping blocked directions.
    Cycle,
    /// Uniformly random legal direction.
    Random,
}

const CYCLE_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

/// Stateful move chooser for one game.
#[derive(Debug)]
struct Chooser {
    policy: Policy,
    cursor: usize,
    rng: StdRng,
}

impl Chooser {
    fn new(policy: Policy, seed: u64) -> Self {
        Self {
            policy,
            cursor: 0,
            rng: StdRng::seed_from_u64(seed.wrapping_add(1000)),
        }
    }

    fn choose(&mut self, legal: &[Direction]) -> Option<Direction> {
        if legal.is_empty() {
            return None;
        }
        match self.policy {
            Policy::Cycle => {
                for _ in 0..CYCLE_ORDER.len() {
                    let direction = CYCLE_ORDER[self.cursor % CYCLE_ORDER.len()];
                    self.cursor += 1;
                    if legal.contains(&direction) {
                        return Some(direction);
                    }
                }
                None
            }
            Policy::Random => Some(legal[self.rng.random_range(0..legal.len())]),
        }
    }
}

/// Parameters for a batch of headless games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Getters)]
pub struct AutoplaySettings {
    /// Number of games to play.
    games: u32,
    /// Seed of the first game; game `i` uses `seed + i`.
    seed: u64,
    /// Move policy.
    policy: Policy,
    /// Rewinds allowed per game.
    continues: u32,
    /// Move cap per game, 0 for none.
    max_moves: u32,
}

/// Outcome of one headless game.
#[derive(Debug, Clone, PartialEq, Eq, new, Getters)]
pub struct GameSummary {
    /// Seed the game ran with.
    seed: u64,
    /// Final score.
    score: u32,
    /// Largest tile reached.
    max_tile: u32,
    /// Moves that changed the board.
    moves: u32,
    /// Rewinds used.
    continues: u32,
}

/// Plays one game to completion.
///
/// Merged tiles are disposed straight away since nothing animates them.
#[instrument]
pub fn play_one(seed: u64, policy: Policy, continues: u32, max_moves: u32) -> GameSummary {
    let mut game = Game::seeded(seed);
    let mut chooser = Chooser::new(policy, seed);
    let mut used = 0;
    let mut requests = 0;

    loop {
        if game.is_over() {
            if used < continues && game.continue_from_game_over() {
                used += 1;
                debug!(used, "Continued");
                continue;
            }
            break;
        }
        if max_moves != 0 && requests >= max_moves {
            debug!("Move cap reached");
            break;
        }
        let Some(direction) = chooser.choose(&game.legal_directions()) else {
            break;
        };
        let report = game.move_tiles(direction);
        game.dispose(&report.removed);
        requests += 1;
    }

    let summary = GameSummary::new(seed, game.score(), game.max_tile(), game.move_count(), used);
    info!(?summary, "Game finished");
    summary
}

/// Plays every game in the batch.
#[instrument]
pub fn run(settings: AutoplaySettings) -> Vec<GameSummary> {
    (0..settings.games)
        .map(|i| {
            play_one(
                settings.seed.wrapping_add(u64::from(i)),
                settings.policy,
                settings.continues,
                settings.max_moves,
            )
        })
        .collect()
}

/// Formats the per-game lines and batch totals.
pub fn report(settings: &AutoplaySettings, summaries: &[GameSummary]) -> String {
    let mut lines = vec![
        "=== Autoplay ===".to_string(),
        format!(
            "games={} policy={} seed={} continues={}",
            settings.games, settings.policy, settings.seed, settings.continues
        ),
    ];
    lines.extend(summaries.iter().enumerate().map(|(i, s)| {
        format!(
            "game {:>3}: score={} max_tile={} moves={} continues={}",
            i + 1,
            s.score,
            s.max_tile,
            s.moves,
            s.continues
        )
    }));
    if !summaries.is_empty() {
        let total: u64 = summaries.iter().map(|s| u64::from(s.score)).sum();
        let best_tile = summaries.iter().map(|s| s.max_tile).max().unwrap_or(0);
        lines.push(format!(
            "avg_score={:.2} max_tile_overall={}",
            total as f64 / summaries.len() as f64,
            best_tile
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}
