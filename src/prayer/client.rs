use crate::error::PrayerError;
use crate::prayer::city::normalize_city;
use crate::prayer::models::{ApiErrorBody, DailyTimes, PrayerResponse};
use crate::prayer::retry::with_retry_if;
use reqwest::blocking::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.collectapi.com";

pub struct PrayerClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PrayerClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Override the base URL (config or wiremock)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    fn auth_header(&self) -> String {
        format!("apikey {}", self.api_key)
    }

    /// Fetch today's prayer times for a city.
    pub fn fetch_daily_times(&self, city: &str) -> Result<DailyTimes, PrayerError> {
        let url = format!("{}/pray/all", self.base_url);
        let normalized = normalize_city(city);
        tracing::debug!(city, normalized = %normalized, "fetching prayer times");

        let response = self
            .client
            .get(&url)
            .query(&[("data.city", normalized.as_str())])
            .header("content-type", "application/json")
            .header("authorization", self.auth_header())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .ok()
                .and_then(|body| body.message);
            return Err(match message {
                Some(message) => PrayerError::Api {
                    status: status.as_u16(),
                    message,
                },
                None => PrayerError::Http {
                    status: status.as_u16(),
                },
            });
        }

        let body = response.json::<PrayerResponse>()?;
        if !body.success {
            return Err(PrayerError::Unsuccessful);
        }
        if body.result.is_empty() {
            return Err(PrayerError::Empty {
                city: city.to_string(),
            });
        }

        tracing::debug!(city, entries = body.result.len(), "prayer times received");
        Ok(DailyTimes::new(body.result))
    }

    /// [`Self::fetch_daily_times`] with backoff on transient failures.
    pub fn fetch_with_retry(&self, city: &str, max_retries: u32) -> Result<DailyTimes, PrayerError> {
        with_retry_if(
            || self.fetch_daily_times(city),
            max_retries,
            PrayerError::is_retryable,
        )
    }
}
