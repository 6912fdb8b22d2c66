//! Loading screen widget.
//!
//! Shown while the one-shot position fix is outstanding. A failed fix
//! is logged, not displayed: the screen keeps waiting, matching the
//! accepted indefinite-loading behavior.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// Widget displaying the loading state.
pub struct LoadingWidget;

impl Widget for LoadingWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::raw(""),
            Line::styled("Loading location...", Style::default().fg(Color::Cyan)),
            Line::raw(""),
            Line::styled("q: quit", Style::default().fg(Color::DarkGray)),
        ];

        Paragraph::new(lines)
            .centered()
            .block(Block::bordered().title("ARWaypoint"))
            .render(area, buf);
    }
}
