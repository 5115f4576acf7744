//! Terminal session: setup, event loop, teardown.

use crate::app::{App, UiEvent};
use crate::best_score::BestScore;
use crate::config::GameConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use strictly_2048::{Game, RandomSource, RngSource};
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

/// Log file used while the terminal is in raw mode.
pub const LOG_FILE: &str = "strictly_2048.log";

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so output does not fight the alternate screen
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting Strictly 2048 TUI");

    let rng = match config.seed() {
        Some(seed) => RngSource::seeded(*seed),
        None => RngSource::from_entropy(),
    };
    let best = BestScore::load(config.best_score_path())?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let app = App::new(Game::new(rng), best, config.dispose_delay(), event_tx.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &event_tx, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, drains pending events, then polls the keyboard.
#[instrument(skip_all)]
async fn run_app<R: RandomSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<R>,
    event_tx: &mpsc::UnboundedSender<UiEvent>,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(ev) = event_rx.try_recv() {
            app.handle_event(ev);
        }

        if app.should_quit() {
            info!(score = app.game().score(), best = app.best(), "Leaving");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if event_tx.send(UiEvent::Key(key.code)).is_err() {
                warn!("Event channel closed, key dropped");
            }
        }

        tokio::task::yield_now().await;
    }
}
