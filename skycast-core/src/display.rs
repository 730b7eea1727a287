//! Text formatting shared by every front end.
//!
//! Nothing here has state or side effects: each function maps its input to
//! strings and renders whatever numbers it is given.

use crate::{controller::DisplayView, model::WeatherDetails};

pub const LOADING_TEXT: &str = "Loading...";
pub const NOT_FOUND_TEXT: &str = "City not found";

pub fn temperature_text(details: &WeatherDetails) -> String {
    format!("{} °C", details.temperature)
}

pub fn latitude_text(details: &WeatherDetails) -> String {
    details.latitude.to_string()
}

pub fn longitude_text(details: &WeatherDetails) -> String {
    details.longitude.to_string()
}

pub fn humidity_text(details: &WeatherDetails) -> String {
    format!("{}%", details.humidity)
}

pub fn wind_text(details: &WeatherDetails) -> String {
    format!("{} Km/h", details.wind)
}

/// Lines of the weather layout, top to bottom.
pub fn details_lines(details: &WeatherDetails) -> Vec<String> {
    let mut lines: Vec<String> = details.icon.art().iter().map(|l| l.to_string()).collect();
    lines.extend([
        temperature_text(details),
        details.city.clone(),
        details.country.clone(),
        format!(
            "Latitude {}   Longitude {}",
            latitude_text(details),
            longitude_text(details)
        ),
        format!("{} Humidity", humidity_text(details)),
        format!("{} Wind Speed", wind_text(details)),
    ]);
    lines
}

/// Every visible region of `view`, in display order.
pub fn view_lines(view: &DisplayView<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    if view.loading {
        lines.push(LOADING_TEXT.to_string());
    }
    if let Some(error) = view.error {
        lines.push(error.to_string());
    }
    if view.city_not_found {
        lines.push(NOT_FOUND_TEXT.to_string());
    }
    if let Some(details) = view.details {
        lines.extend(details_lines(details));
    }
    lines
}
