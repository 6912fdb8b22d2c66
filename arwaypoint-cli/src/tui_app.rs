//! TUI application loop.
//!
//! Draws the current session state at a fixed tick rate and translates
//! key presses into session events:
//!
//! - `a` - enter the AR view (only acted on when the entry is offered)
//! - `t` / `u` - inject "tracking normal" / "tracking unavailable"
//! - `q` / `Esc` - quit
//!
//! The reducer owns all state; this loop only reads snapshots and
//! injects events, so there is nothing to lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use arwaypoint::app::App;
use arwaypoint::ar::TrackingState;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::error::CliError;
use crate::ui;

/// Tick rate for redraws and input polling.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Run the interactive TUI until the user quits or a signal arrives.
pub fn run_tui(app: &App, shutdown: Arc<AtomicBool>) -> Result<(), CliError> {
    let mut terminal = ui::init_terminal()?;
    let handle = app.handle();
    let target = app.config().target;

    let result = loop {
        if shutdown.load(Ordering::SeqCst) {
            break Ok(());
        }

        let state = handle.state();
        if let Err(e) = terminal.draw(|frame| ui::render(frame, &state, &target)) {
            break Err(CliError::Terminal(e));
        }

        match event::poll(TICK_RATE) {
            Ok(false) => continue,
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                    KeyCode::Char('a') => handle.request_ar(),
                    KeyCode::Char('t') => handle.tracking_changed(TrackingState::Normal),
                    KeyCode::Char('u') => handle.tracking_changed(TrackingState::Unavailable),
                    _ => {}
                },
                Ok(_) => {}
                Err(e) => break Err(CliError::Terminal(e)),
            },
            Err(e) => break Err(CliError::Terminal(e)),
        }
    };

    ui::restore_terminal(terminal)?;
    result
}
