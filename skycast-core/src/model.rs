use crate::{
    config::DEFAULT_CITY,
    icon::{ConditionIcon, icon_for_code},
};

/// Fields parsed from one successful provider response, before any display
/// rounding or icon mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temperature_c: f64,
    pub humidity_pct: u32,
    pub wind_speed: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub icon_code: String,
}

/// Outcome of a lookup that reached the provider and got a usable answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(WeatherReport),
    /// The provider answered with its not-found sentinel.
    CityNotFound,
}

/// Everything the weather display renders.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherDetails {
    pub icon: ConditionIcon,
    /// Degrees Celsius, floor-rounded.
    pub temperature: i64,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub humidity: u32,
    /// Km/h as reported by the provider.
    pub wind: f64,
}

impl WeatherDetails {
    pub fn from_report(report: &WeatherReport) -> Self {
        Self {
            icon: icon_for_code(&report.icon_code),
            temperature: report.temperature_c.floor() as i64,
            city: report.city.clone(),
            country: report.country.clone(),
            latitude: report.latitude,
            longitude: report.longitude,
            humidity: report.humidity_pct,
            wind: report.wind_speed,
        }
    }

    /// Sample record shown before the first lookup completes. The country is
    /// only known for the built-in sample city and is left blank otherwise.
    pub fn sample(city: impl Into<String>) -> Self {
        let city = city.into();
        let country = if city == DEFAULT_CITY { "IN" } else { "" };
        Self {
            icon: ConditionIcon::Snow,
            temperature: 0,
            city,
            country: country.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            humidity: 0,
            wind: 0.0,
        }
    }
}

impl Default for WeatherDetails {
    fn default() -> Self {
        Self::sample(DEFAULT_CITY)
    }
}
