//! Search controller: owns the widget state and drives lookups.
//!
//! A lookup is split in two halves so the caller decides where the await
//! happens. [`SearchController::trigger_search`] flips the state to loading
//! and hands out a [`SearchTicket`]; once the provider answers, the outcome
//! goes back through [`SearchController::apply`]. Only the ticket from the
//! most recent trigger is applied, so an older request that settles late can
//! never overwrite a newer result.

use tracing::{debug, info, warn};

use crate::{
    error::LookupError,
    model::{Lookup, WeatherDetails},
    provider::WeatherProvider,
};

/// Keys the controller reacts to. Only [`KeyPress::Enter`] does anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Char(char),
    Backspace,
    Other,
}

/// Handle for one issued lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    /// Query text captured when the search was triggered.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The controller's display record.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    pub query_text: String,
    pub details: WeatherDetails,
    pub loading: bool,
    pub city_not_found: bool,
    pub error: Option<String>,
}

impl WidgetState {
    /// Initial-mount state: the sample city in both the query and the details.
    pub fn new(default_city: impl Into<String>) -> Self {
        let city = default_city.into();
        Self {
            query_text: city.clone(),
            details: WeatherDetails::sample(city),
            loading: false,
            city_not_found: false,
            error: None,
        }
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CITY)
    }
}

/// Which display regions are visible for a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayView<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub city_not_found: bool,
    /// Present only while neither loading nor not-found is active.
    pub details: Option<&'a WeatherDetails>,
}

#[derive(Debug, Default)]
pub struct SearchController {
    state: WidgetState,
    generation: u64,
}

impl SearchController {
    pub fn new(default_city: impl Into<String>) -> Self {
        Self {
            state: WidgetState::new(default_city),
            generation: 0,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn query_text(&self) -> &str {
        &self.state.query_text
    }

    /// Replace the query text verbatim.
    pub fn set_query_text(&mut self, value: impl Into<String>) {
        self.state.query_text = value.into();
    }

    /// Start a lookup for the current query text.
    ///
    /// Always succeeds, even while another lookup is in flight; the earlier
    /// ticket is superseded.
    pub fn trigger_search(&mut self) -> SearchTicket {
        self.generation += 1;
        self.state.loading = true;

        info!(
            query = %self.state.query_text,
            generation = self.generation,
            "search triggered"
        );

        SearchTicket {
            generation: self.generation,
            query: self.state.query_text.clone(),
        }
    }

    /// Enter triggers a search; every other key is ignored.
    pub fn handle_key_down(&mut self, key: KeyPress) -> Option<SearchTicket> {
        match key {
            KeyPress::Enter => Some(self.trigger_search()),
            _ => None,
        }
    }

    /// Apply a settled lookup. Returns `false`, leaving the state untouched,
    /// when `ticket` has been superseded by a later trigger.
    pub fn apply(&mut self, ticket: SearchTicket, outcome: Result<Lookup, LookupError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                latest = self.generation,
                query = %ticket.query,
                "discarding superseded lookup"
            );
            return false;
        }

        match outcome {
            Ok(Lookup::CityNotFound) => {
                info!(query = %ticket.query, "city not found");
                self.state.city_not_found = true;
            }
            Ok(Lookup::Found(report)) => {
                info!(
                    query = %ticket.query,
                    city = %report.city,
                    country = %report.country,
                    "weather loaded"
                );
                self.state.details = WeatherDetails::from_report(&report);
                self.state.city_not_found = false;
                self.state.error = None;
            }
            Err(err) => {
                warn!(query = %ticket.query, error = %err, "weather lookup failed");
                self.state.error = Some(err.user_message().to_string());
            }
        }

        self.state.loading = false;
        true
    }

    /// Trigger, query `provider`, and apply the result in one go.
    pub async fn search(&mut self, provider: &dyn WeatherProvider) -> bool {
        let ticket = self.trigger_search();
        let outcome = provider.current_weather(ticket.query()).await;
        self.apply(ticket, outcome)
    }

    pub fn view(&self) -> DisplayView<'_> {
        let state = &self.state;
        DisplayView {
            loading: state.loading,
            error: state.error.as_deref(),
            city_not_found: state.city_not_found,
            details: (!state.loading && !state.city_not_found).then_some(&state.details),
        }
    }
}
