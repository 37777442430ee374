//! Terminal front end for Simon.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{KeyAction, map_key, move_cursor};

use crate::config::SimonConfig;
use crate::orchestrator::{PlayerInput, RoundOrchestrator};
use crate::presentation::{ChannelPresentation, SimonEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    style::Print,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Log file used while the terminal is in raw mode.
pub const LOG_FILE: &str = "strictly_says.log";

/// Runs the interactive terminal game until the player quits.
pub async fn run_tui(config: SimonConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    let log_file = std::fs::File::create(LOG_FILE).context("Failed to create log file")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Says TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (presentation, mut event_rx) = ChannelPresentation::channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let bell = *config.bell();

    let mut orchestrator = RoundOrchestrator::from_config(config, presentation, input_rx);
    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "Orchestrator error");
        }
    });

    let res = run_app(&mut terminal, App::new(), input_tx, &mut event_rx, bell).await;

    orchestrator_handle.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    input_tx: mpsc::UnboundedSender<PlayerInput>,
    event_rx: &mut mpsc::UnboundedReceiver<SimonEvent>,
    bell: bool,
) -> Result<()> {
    loop {
        // Apply everything the orchestrator reported since the last frame
        while let Ok(event) = event_rx.try_recv() {
            if bell && matches!(event, SimonEvent::Sound(_)) {
                execute!(io::stdout(), Print('\u{7}'))?;
            }
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(30))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match map_key(&app, key.code) {
                KeyAction::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                KeyAction::Cursor(cursor) => app.set_cursor(cursor),
                KeyAction::Input(input) => {
                    debug!(?input, "Forwarding input");
                    input_tx.send(input).context("Orchestrator stopped")?;
                }
                KeyAction::Ignore => {}
            }
        }

        tokio::task::yield_now().await;
    }
}
