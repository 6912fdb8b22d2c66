//! Terminal UI for ARWaypoint.
//!
//! Renders the three session states as full-screen views:
//! loading, map (with markers and the AR entry hint), and AR.
//!
//! # Module Structure
//!
//! - `widgets` - One widget per session display mode

pub mod widgets;

use std::io::{self, Stdout};

use arwaypoint::ar::ArScene;
use arwaypoint::geo::Region;
use arwaypoint::map::MapScene;
use arwaypoint::session::{AppMode, SessionState};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use widgets::{ArWidget, LoadingWidget, MapWidget};

/// The terminal type used by the TUI.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
pub fn init_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave the alternate screen and restore the terminal.
pub fn restore_terminal(mut terminal: Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Render the view for the current session state.
pub fn render(frame: &mut Frame, state: &SessionState, target: &Region) {
    let area = frame.area();
    match state.mode {
        AppMode::Loading => frame.render_widget(LoadingWidget, area),
        AppMode::Map => match MapScene::from_state(state, target) {
            Some(scene) => frame.render_widget(MapWidget::new(&scene), area),
            // Map mode is only entered after a fix, so this arm is unreachable
            None => frame.render_widget(LoadingWidget, area),
        },
        AppMode::Ar => {
            let scene = ArScene::for_label(&state.label);
            frame.render_widget(ArWidget::new(&scene), area);
        }
    }
}
