use thiserror::Error;

/// The single message shown to the user for every failed lookup that is not
/// an explicit "city not found".
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while fetching the weather data.";

/// Why a weather lookup failed.
///
/// The variants are kept apart for logging only; the widget collapses all of
/// them into [`GENERIC_FAILURE_MESSAGE`].
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request could not be sent or the body could not be read.
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not JSON.
    #[error("weather response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The response is JSON but lacks a field the widget needs.
    #[error("weather response has an unexpected shape: {0}")]
    Payload(String),
}

impl LookupError {
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}
