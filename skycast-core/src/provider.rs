use crate::{Config, error::LookupError, model::Lookup, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather for a city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up the current weather for `city`, passed through verbatim.
    async fn current_weather(&self, city: &str) -> Result<Lookup, LookupError>;
}

/// Construct the provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;

    let provider =
        OpenWeatherProvider::new(api_key.to_owned()).with_base_url(config.base_url.clone());

    Ok(Box::new(provider))
}
