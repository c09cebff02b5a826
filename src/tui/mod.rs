//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the dossier,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Lifecycle
//!
//! Every `Effect::Fetch` spawns a tokio task that calls the content source and
//! sends `Action::ContentFetched` back over a channel. Tasks are never
//! cancelled. When the viewer exits the receiver is dropped, so results that
//! arrive afterwards fail to send and are logged instead of applied.
//!
//! ## Redraw Strategy
//!
//! While a fetch is in flight the loop redraws every ~80ms to animate the
//! spinner. Otherwise it sleeps up to 500ms and only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::content::{ContentSource, FetchError};
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::DossierViewState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub dossier_view: DossierViewState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            dossier_view: DossierViewState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Runs the dossier viewer until the user quits.
///
/// Must be called from inside a tokio runtime; fetches are spawned onto it.
pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    start(&mut app, &tx);

    let start_time = Instant::now();
    let mut needs_redraw = true;

    let result = loop {
        if app.loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if app.loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            match event {
                TuiEvent::Quit => {
                    if dispatch(&mut app, Action::Quit, &tx) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::Refresh => {
                    dispatch(&mut app, Action::Refresh, &tx);
                }
                TuiEvent::Resize => {}
                scroll => {
                    tui.dossier_view.handle_event(&scroll);
                }
            }
        }

        if should_quit {
            break Ok(());
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(&mut app, action, &tx);
        }
    };

    info!("Dossier viewer exiting");
    ratatui::restore();
    result
}

/// Kicks off the first resolution. An unconfigured source settles on the spot
/// with `NotConfigured`, so no fetch task is spawned and no spinner shows.
fn start(app: &mut App, tx: &mpsc::Sender<Action>) {
    if app.source.is_configured() {
        dispatch(app, Action::Refresh, tx);
    } else {
        info!("No remote content source configured, using bundled dossier");
        let generation = app.generation;
        dispatch(
            app,
            Action::ContentFetched {
                generation,
                result: Err(FetchError::NotConfigured),
            },
            tx,
        );
    }
}

/// Applies an action and starts whatever I/O its effect asks for.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> Effect {
    let effect = update(app, action);
    if let Effect::Fetch { generation } = effect {
        spawn_fetch(app.source.clone(), generation, tx.clone());
    }
    effect
}

fn spawn_fetch(
    source: Arc<dyn ContentSource>,
    generation: u64,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning dossier fetch (generation {})", generation);
    tokio::spawn(async move {
        let result = source.fetch().await;
        if tx.send(Action::ContentFetched { generation, result }).is_err() {
            warn!(
                "Dropping fetch result for generation {}: viewer already closed",
                generation
            );
        }
    })
}
