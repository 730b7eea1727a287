use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    config::DEFAULT_BASE_URL,
    error::LookupError,
    model::{Lookup, WeatherReport},
};

use super::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Status code the provider puts in `cod` when no location matches. It is a
/// string in the payload, unlike the numeric `200` of a hit.
const NOT_FOUND_COD: &str = "404";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at another host, e.g. a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CURRENT_WEATHER_PATH)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    wind: OwWind,
    sys: OwSys,
    coord: OwCoord,
    weather: Vec<OwWeather>,
}

/// Turn a response body into a [`Lookup`].
///
/// The not-found sentinel is checked before any field is read, so a not-found
/// payload never fails on missing weather fields.
pub(crate) fn parse_current(body: &str) -> Result<Lookup, LookupError> {
    let value: Value = serde_json::from_str(body).map_err(LookupError::Decode)?;

    if value.get("cod").and_then(Value::as_str) == Some(NOT_FOUND_COD) {
        return Ok(Lookup::CityNotFound);
    }

    let parsed: OwCurrentResponse =
        serde_json::from_value(value).map_err(|e| LookupError::Payload(e.to_string()))?;

    let icon_code = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.icon)
        .ok_or_else(|| LookupError::Payload("`weather` array is empty".to_string()))?;

    Ok(Lookup::Found(WeatherReport {
        city: parsed.name,
        country: parsed.sys.country,
        temperature_c: parsed.main.temp,
        humidity_pct: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        latitude: parsed.coord.lat,
        longitude: parsed.coord.lon,
        icon_code,
    }))
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn current_weather(&self, city: &str) -> Result<Lookup, LookupError> {
        let url = self.endpoint();
        debug!(url = %url, "Fetching current weather");

        // The HTTP status is not consulted: the provider reports not-found
        // through `cod` in the body.
        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "Metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "Received current weather response");

        parse_current(&body)
    }
}
