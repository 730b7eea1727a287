use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use skycast_core::{Config, SearchController, WeatherProvider, display, provider_from_config};
use std::sync::Arc;

use crate::{app, logging};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather lookup widget")]
pub struct Cli {
    /// Defaults to the interactive widget.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and the starting city.
    Configure,

    /// Look up one city and print the result.
    Show {
        /// City name, sent to the provider as typed.
        city: String,
    },

    /// Open the interactive weather widget.
    Tui {
        /// Starting query text; defaults to the configured city.
        #[arg(long)]
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Tui { city: None }) {
            Command::Configure => {
                logging::init_stderr()?;
                configure()
            }
            Command::Show { city } => {
                logging::init_stderr()?;
                show(city).await
            }
            Command::Tui { city } => {
                let config = Config::load()?;
                // Fail on a missing key before the terminal switches screens.
                let provider = provider_from_config(&config)?;
                logging::init_file(&Config::data_dir()?.join("skycast.log"))?;

                let city = city.unwrap_or_else(|| config.default_city.clone());
                app::run(SearchController::new(city), Arc::from(provider)).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let default_city = Text::new("Starting city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read starting city")?;

    config.set_api_key(api_key);
    config.default_city = default_city;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: String) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    for line in show_with(provider.as_ref(), city).await? {
        println!("{line}");
    }
    Ok(())
}

/// Run one lookup and return the layout lines, or fail on not-found and
/// lookup errors so the process exits non-zero.
async fn show_with(provider: &dyn WeatherProvider, city: String) -> anyhow::Result<Vec<String>> {
    let mut controller = SearchController::new(city.clone());
    controller.search(provider).await;

    let view = controller.view();
    if let Some(error) = view.error {
        bail!("{error}");
    }
    if view.city_not_found {
        bail!("{}: {city}", display::NOT_FOUND_TEXT);
    }

    Ok(display::view_lines(&view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skycast_core::{Lookup, LookupError, WeatherReport, error::GENERIC_FAILURE_MESSAGE};

    #[derive(Debug)]
    struct FixedProvider;

    #[async_trait]
    impl WeatherProvider for FixedProvider {
        async fn current_weather(&self, city: &str) -> Result<Lookup, LookupError> {
            match city {
                "Atlantis" => Ok(Lookup::CityNotFound),
                "Nowhere" => Err(LookupError::Payload("missing main".into())),
                _ => Ok(Lookup::Found(WeatherReport {
                    city: city.to_string(),
                    country: "IN".into(),
                    temperature_c: 31.7,
                    humidity_pct: 70,
                    wind_speed: 12.0,
                    latitude: 13.08,
                    longitude: 80.27,
                    icon_code: "01d".into(),
                })),
            }
        }
    }

    #[tokio::test]
    async fn show_prints_the_weather_layout() {
        let lines = show_with(&FixedProvider, "Chennai".into()).await.unwrap();

        assert!(lines.contains(&"31 °C".to_string()));
        assert!(lines.contains(&"Chennai".to_string()));
        assert!(lines.contains(&"70% Humidity".to_string()));
        assert!(lines.contains(&"12 Km/h Wind Speed".to_string()));
        assert!(!lines.iter().any(|l| l == display::LOADING_TEXT));
    }

    #[tokio::test]
    async fn show_fails_when_the_city_is_not_found() {
        let err = show_with(&FixedProvider, "Atlantis".into()).await.unwrap_err();
        assert_eq!(err.to_string(), "City not found: Atlantis");
    }

    #[tokio::test]
    async fn show_fails_with_the_generic_message_on_lookup_errors() {
        let err = show_with(&FixedProvider, "Nowhere".into()).await.unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
    }
}
