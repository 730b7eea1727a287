//! Core library for the `skycast` city weather widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider, with an OpenWeather implementation
//! - The search controller state machine and the display view model
//! - The static condition-code to icon table
//!
//! It is used by `skycast-cli`, but carries no terminal code of its own.

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;

pub use config::Config;
pub use controller::{DisplayView, KeyPress, SearchController, SearchTicket, WidgetState};
pub use error::LookupError;
pub use icon::{ConditionIcon, icon_for_code};
pub use model::{Lookup, WeatherDetails, WeatherReport};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
