//! Map screen widget.
//!
//! Plots the current position (blue) and the target (red) on a canvas
//! framed by the initial region, with the distance readout and the AR
//! entry hint underneath.

use arwaypoint::map::{MapScene, PinColor, AR_BUTTON_LABEL};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Paragraph, Widget,
    },
};

/// Widget displaying the map scene.
pub struct MapWidget<'a> {
    scene: &'a MapScene,
}

impl<'a> MapWidget<'a> {
    pub fn new(scene: &'a MapScene) -> Self {
        Self { scene }
    }

    fn pin_color(pin: PinColor) -> Color {
        match pin {
            PinColor::Blue => Color::Blue,
            PinColor::Red => Color::Red,
        }
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [map_area, status_area] =
            Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).areas(area);

        let region = &self.scene.initial_region;
        let x_bounds = [
            region.center.longitude - region.longitude_delta / 2.0,
            region.center.longitude + region.longitude_delta / 2.0,
        ];
        let y_bounds = [
            region.center.latitude - region.latitude_delta / 2.0,
            region.center.latitude + region.latitude_delta / 2.0,
        ];

        Canvas::default()
            .block(Block::bordered().title("Map"))
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for marker in &self.scene.markers {
                    let color = Self::pin_color(marker.pin_color);
                    ctx.draw(&Points {
                        coords: &[(marker.coordinate.longitude, marker.coordinate.latitude)],
                        color,
                    });
                    ctx.print(
                        marker.coordinate.longitude,
                        marker.coordinate.latitude,
                        Line::styled(marker.title.clone(), Style::default().fg(color)),
                    );
                }
            })
            .render(map_area, buf);

        let mut status = vec![Line::styled(
            self.scene.distance_text.clone(),
            Style::default().fg(Color::White),
        )];
        let mut hints = vec![Span::styled("q: quit", Style::default().fg(Color::DarkGray))];
        if self.scene.show_ar_button {
            hints.push(Span::raw("  "));
            hints.push(Span::styled(
                format!("a: {}", AR_BUTTON_LABEL),
                Style::default().fg(Color::Green),
            ));
        }
        status.push(Line::from(hints));

        Paragraph::new(status)
            .centered()
            .block(Block::bordered())
            .render(status_area, buf);
    }
}
