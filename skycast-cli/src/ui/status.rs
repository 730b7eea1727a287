use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use skycast_core::{DisplayView, display};

/// Loading, error, and not-found regions; each appears only when active.
pub struct StatusLines {
    lines: Vec<Line<'static>>,
}

impl StatusLines {
    pub fn new(view: &DisplayView<'_>) -> Self {
        let mut lines = Vec::new();
        if view.loading {
            lines.push(status_line(display::LOADING_TEXT, Color::Cyan));
        }
        if let Some(error) = view.error {
            lines.push(status_line(error, Color::Red));
        }
        if view.city_not_found {
            lines.push(status_line(display::NOT_FOUND_TEXT, Color::Yellow));
        }
        Self { lines }
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }
}

fn status_line(text: &str, color: Color) -> Line<'static> {
    Line::from(text.to_string())
        .style(Style::default().fg(color))
        .centered()
}

impl Widget for StatusLines {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines).render(area, buf);
    }
}
