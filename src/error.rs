use thiserror::Error;

/// Failures of the prayer-times fetch. None of these reach the countdown
/// core; the caller shows [`FETCH_FAILED_MESSAGE`] and keeps running.
#[derive(Error, Debug)]
pub enum PrayerError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("API returned unsuccessful response")]
    Unsuccessful,

    #[error("no prayer times returned for '{city}'")]
    Empty { city: String },
}

impl PrayerError {
    /// Transport failures and 5xx responses are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            PrayerError::Transport(e) => !e.is_decode(),
            PrayerError::Http { status } | PrayerError::Api { status, .. } => *status >= 500,
            PrayerError::Unsuccessful | PrayerError::Empty { .. } => false,
        }
    }
}

/// Shown to the user whenever a fetch fails, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Namaz vakitleri yüklenemedi.";
