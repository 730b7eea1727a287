use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const PLACEHOLDER: &str = "Enter City";
pub const BUTTON_LABEL: &str = "Search";

/// Text input bound to the query, with the search button on its right.
pub struct SearchBar<'a> {
    query: &'a str,
}

impl<'a> SearchBar<'a> {
    pub const HEIGHT: u16 = 3;
    const BUTTON_WIDTH: u16 = 10;

    pub fn new(query: &'a str) -> Self {
        Self { query }
    }

    /// Split the bar into the input box and the button.
    pub fn split(area: Rect) -> (Rect, Rect) {
        let [input, button] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(Self::BUTTON_WIDTH)])
                .areas(area);
        (input, button)
    }

    /// Tail of the query that fits in `width` cells, leaving room for the cursor.
    fn visible_text(&self, width: u16) -> &'a str {
        let room = usize::from(width.saturating_sub(1));
        let len = self.query.chars().count();
        if len <= room {
            return self.query;
        }
        let skip = len - room;
        let start = self
            .query
            .char_indices()
            .nth(skip)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len());
        &self.query[start..]
    }

    pub fn cursor_position(&self, input_area: Rect) -> Option<Position> {
        let inner = input_area.inner(Margin::new(1, 1));
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let offset = self.visible_text(inner.width).chars().count() as u16;
        Some(Position::new(inner.x + offset, inner.y))
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (input_area, button_area) = Self::split(area);
        let border = Style::default().fg(Color::Rgb(80, 80, 100));

        let input_block = Block::default().borders(Borders::ALL).border_style(border);
        let inner = input_block.inner(input_area);
        input_block.render(input_area, buf);

        let text = if self.query.is_empty() {
            Line::from(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Line::from(self.visible_text(inner.width)).style(Style::default().fg(Color::White))
        };
        Paragraph::new(text).render(inner, buf);

        let button_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let button_inner = button_block.inner(button_area);
        button_block.render(button_area, buf);
        Line::from(BUTTON_LABEL)
            .style(Style::default().fg(Color::Cyan))
            .bold()
            .centered()
            .render(button_inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_to_string;

    #[test]
    fn empty_query_shows_placeholder() {
        let output = render_to_string(40, 3, |frame| {
            frame.render_widget(SearchBar::new(""), frame.area());
        });
        assert!(output.contains(PLACEHOLDER));
        assert!(output.contains(BUTTON_LABEL));
    }

    #[test]
    fn query_is_rendered_verbatim() {
        let output = render_to_string(40, 3, |frame| {
            frame.render_widget(SearchBar::new("São Paulo"), frame.area());
        });
        assert!(output.contains("São Paulo"));
        assert!(!output.contains(PLACEHOLDER));
    }

    #[test]
    fn long_query_keeps_the_tail_visible() {
        let bar = SearchBar::new("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(bar.visible_text(6), "vwxyz");
        assert_eq!(bar.visible_text(40), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn cursor_sits_after_the_text() {
        let bar = SearchBar::new("Pune");
        let (input, _) = SearchBar::split(Rect::new(0, 0, 40, 3));
        assert_eq!(bar.cursor_position(input), Some(Position::new(5, 1)));
    }

    #[test]
    fn button_is_right_aligned() {
        let (input, button) = SearchBar::split(Rect::new(0, 0, 40, 3));
        assert_eq!(button.right(), 40);
        assert_eq!(input.right(), button.x);
    }
}
