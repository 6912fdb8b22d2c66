//! AR screen widget.
//!
//! Terminal stand-in for the camera-anchored scene: the label text
//! centered in an empty frame, with keys for injecting tracking
//! signals.

use arwaypoint::ar::ArScene;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// Widget displaying the AR scene.
pub struct ArWidget<'a> {
    scene: &'a ArScene,
}

impl<'a> ArWidget<'a> {
    pub fn new(scene: &'a ArScene) -> Self {
        Self { scene }
    }
}

impl Widget for ArWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Vertically offset the label toward the center of the frame
        let pad = (area.height / 2).saturating_sub(2) as usize;
        let mut lines: Vec<Line> = std::iter::repeat_with(|| Line::raw(""))
            .take(pad)
            .collect();

        lines.push(Line::styled(
            self.scene.text.content.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "t: tracking normal  u: tracking lost  q: quit",
            Style::default().fg(Color::DarkGray),
        ));

        Paragraph::new(lines)
            .centered()
            .block(Block::bordered().title("AR"))
            .render(area, buf);
    }
}
