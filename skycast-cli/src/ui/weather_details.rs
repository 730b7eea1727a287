use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use skycast_core::{ConditionIcon, WeatherDetails, display};

/// The populated weather layout. Renders whatever it is given.
pub struct WeatherDetailsView<'a> {
    details: &'a WeatherDetails,
}

impl<'a> WeatherDetailsView<'a> {
    pub const HEIGHT: u16 = 15;

    pub fn new(details: &'a WeatherDetails) -> Self {
        Self { details }
    }
}

fn icon_color(icon: ConditionIcon) -> Color {
    match icon {
        ConditionIcon::Sun => Color::Rgb(255, 220, 100),
        ConditionIcon::Cloud => Color::Rgb(200, 200, 210),
        ConditionIcon::Drizzle => Color::Rgb(150, 190, 230),
        ConditionIcon::Rain => Color::Rgb(100, 150, 255),
        ConditionIcon::Snow => Color::Rgb(230, 240, 255),
    }
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

fn reading(value: String, name: &'static str) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(value, Style::default().fg(Color::White).bold())),
        Line::from(label(name)),
    ])
    .centered()
}

impl Widget for WeatherDetailsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let d = self.details;

        let [content] = Layout::vertical([Constraint::Length(Self::HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [art_area, icon_area, temp_area, city_area, country_area, _, coord_area, _, data_area] =
            Layout::vertical([
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .areas(content);

        let art_style = Style::default().fg(icon_color(d.icon));
        let art: Vec<Line> = d
            .icon
            .art()
            .iter()
            .map(|l| Line::styled(*l, art_style))
            .collect();
        Paragraph::new(art).centered().render(art_area, buf);

        Line::from(label(d.icon.label()))
            .centered()
            .render(icon_area, buf);

        Line::from(display::temperature_text(d))
            .style(Style::default().fg(Color::White))
            .bold()
            .centered()
            .render(temp_area, buf);
        Line::from(d.city.clone())
            .style(Style::default().fg(Color::Cyan))
            .bold()
            .centered()
            .render(city_area, buf);
        Line::from(d.country.clone())
            .style(Style::default().fg(Color::Gray))
            .centered()
            .render(country_area, buf);

        let [lat_area, lon_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(coord_area);
        reading(display::latitude_text(d), "Latitude").render(lat_area, buf);
        reading(display::longitude_text(d), "Longitude").render(lon_area, buf);

        let [humidity_area, wind_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(data_area);
        reading(display::humidity_text(d), "Humidity").render(humidity_area, buf);
        reading(display::wind_text(d), "Wind Speed").render(wind_area, buf);
    }
}
