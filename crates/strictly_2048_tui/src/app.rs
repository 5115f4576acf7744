//! Application state and logic.

use crate::best_score::BestScore;
use crate::input::{Action, action_for};
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use std::time::Duration;
use strictly_2048::{Direction, Game, MoveReport, RandomSource, RngSource, TileId};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages delivered to the application loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A key was pressed.
    Key(KeyCode),
    /// Merge animation finished; these tiles can go.
    DisposeTiles(Vec<TileId>),
}

/// Main application state.
///
/// Holds the game session and the collaborators around it. All game
/// decisions stay in [`Game`]; this type only routes input, persists the
/// best score and schedules tile disposal.
#[derive(Debug)]
pub struct App<R = RngSource<StdRng>> {
    game: Game<R>,
    best: BestScore,
    status_message: String,
    dispose_delay: Duration,
    events: mpsc::UnboundedSender<UiEvent>,
    should_quit: bool,
}

impl<R: RandomSource> App<R> {
    /// Creates a new application.
    ///
    /// Disposal events are sent back on `events` once `dispose_delay` has
    /// elapsed after a merging move.
    pub fn new(
        game: Game<R>,
        best: BestScore,
        dispose_delay: Duration,
        events: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            game,
            best,
            status_message: "Use the arrow keys, WASD or hjkl to slide.".to_string(),
            dispose_delay,
            events,
            should_quit: false,
        }
    }

    /// Handles an event from the input loop or a disposal timer.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Key(code) => match action_for(code) {
                Some(action) => self.apply(action),
                None => debug!(?code, "Unbound key"),
            },
            UiEvent::DisposeTiles(ids) => {
                let dropped = self.game.dispose(&ids);
                debug!(requested = ids.len(), dropped, "Disposed merged tiles");
            }
        }
    }

    /// Carries out a user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Move(direction) => self.slide(direction),
            Action::NewGame => {
                self.game.start_game();
                self.status_message = "New game.".to_string();
            }
            Action::Continue => {
                self.status_message = if self.game.continue_from_game_over() {
                    "Rewound the last move. Keep going!".to_string()
                } else {
                    "Nothing to continue from.".to_string()
                };
            }
            Action::Quit => {
                info!(score = self.game.score(), "Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn slide(&mut self, direction: Direction) {
        let report = self.game.move_tiles(direction);
        if !report.moved {
            if !self.game.is_over() {
                self.status_message = format!("Nothing moves {}.", direction);
            }
            return;
        }

        self.status_message = describe(&report);
        self.record_best();
        self.schedule_disposal(report.removed);
    }

    fn record_best(&mut self) {
        if let Err(e) = self.best.record(self.game.score()) {
            warn!(error = %e, "Failed to save best score");
            self.status_message = format!("Could not save best score: {}", e.message);
        }
    }

    /// Sends the consumed tiles back for disposal after the animation delay.
    fn schedule_disposal(&self, ids: Vec<TileId>) {
        if ids.is_empty() {
            return;
        }
        let events = self.events.clone();
        if self.dispose_delay.is_zero() {
            if events.send(UiEvent::DisposeTiles(ids)).is_err() {
                debug!("Event loop gone, disposal dropped");
            }
            return;
        }
        let delay = self.dispose_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(UiEvent::DisposeTiles(ids)).is_err() {
                debug!("Event loop gone, disposal dropped");
            }
        });
    }
}

impl<R> App<R> {
    /// Gets the game session.
    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Best score so far.
    pub fn best(&self) -> u32 {
        self.best.best()
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn describe(report: &MoveReport) -> String {
    if report.game_over {
        "No moves left! Press c to take the last move back or n for a new game.".to_string()
    } else if report.gained > 0 {
        format!("+{}", report.gained)
    } else {
        String::new()
    }
}
