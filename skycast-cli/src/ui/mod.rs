//! Terminal rendering of the widget.
//!
//! Everything in here is a pure function of the controller's state; the only
//! thing handed back to the event loop is where the search button landed, so
//! mouse clicks can be hit-tested against it.

mod search_bar;
mod status;
mod weather_details;

pub use search_bar::SearchBar;
pub use status::StatusLines;
pub use weather_details::WeatherDetailsView;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
};
use skycast_core::SearchController;

pub const TITLE: &str = "Weather App";

/// Screen regions the event loop needs after a draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiAreas {
    pub search_button: Rect,
}

pub fn render(frame: &mut Frame, controller: &SearchController) -> UiAreas {
    let view = controller.view();
    let status = StatusLines::new(&view);

    let [title_area, search_area, status_area, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(SearchBar::HEIGHT),
        Constraint::Length(status.height()),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    frame.render_widget(
        Line::from(TITLE)
            .style(Style::default().fg(Color::Cyan))
            .bold()
            .centered(),
        title_area,
    );

    let search = SearchBar::new(controller.query_text());
    let (input_area, search_button) = SearchBar::split(search_area);
    if let Some(cursor) = search.cursor_position(input_area) {
        frame.set_cursor_position(cursor);
    }
    frame.render_widget(search, search_area);
    frame.render_widget(status, status_area);

    if let Some(details) = view.details {
        frame.render_widget(WeatherDetailsView::new(details), body_area);
    }

    UiAreas { search_button }
}

#[cfg(test)]
pub(crate) fn render_to_string(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut Frame),
) -> String {
    use ratatui::{Terminal, backend::TestBackend};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
