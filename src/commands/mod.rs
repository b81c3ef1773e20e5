pub mod api_key;
pub mod city;
pub mod config;
pub mod countdown;
pub mod times;

use crate::config::Config;
use crate::error::FETCH_FAILED_MESSAGE;
use crate::platform::state_paths;
use crate::prayer::city::find_city;
use crate::prayer::client::PrayerClient;
use crate::prayer::models::DailyTimes;
use crate::state::{State, with_state_lock};
use anyhow::{Context, Result};
use chrono::Utc;

pub fn build_client(config: &Config) -> Result<PrayerClient> {
    let api_key = config.get_api_key()?;
    Ok(PrayerClient::new(&api_key).with_base_url(&config.api.base_url))
}

/// `--city` if given, else the remembered city, else `default_city`.
pub fn resolve_city(config: &Config, explicit: Option<&str>) -> Result<&'static str> {
    if let Some(input) = explicit {
        return find_city(input).with_context(|| {
            format!("Unknown city '{}'. Run 'iftar cities' to list them.", input)
        });
    }

    let (_, state_path) = state_paths(config.state.state_dir_override.as_deref())?;
    let state = State::load(&state_path)?;
    if let Some(city) = state.last_city.as_deref().and_then(find_city) {
        return Ok(city);
    }

    find_city(&config.default_city)
        .with_context(|| format!("Unknown default_city '{}'", config.default_city))
}

/// Store `city` as the one to show next time.
pub fn remember_city(config: &Config, city: &str) -> Result<()> {
    let (lock_path, state_path) = state_paths(config.state.state_dir_override.as_deref())?;
    with_state_lock(&lock_path, &state_path, |state| {
        state.remember_city(city, Utc::now());
        Ok(())
    })
}

/// [`remember_city`] for long-running sessions: a state file that can't be
/// written is logged, not fatal.
pub fn try_remember_city(config: &Config, city: &str) -> bool {
    match remember_city(config, city) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(city, "Could not remember city: {:#}", e);
            false
        }
    }
}

/// Fetch once (with retries) and remember the city on success.
pub fn fetch_and_remember(config: &Config, city: &str) -> Result<DailyTimes> {
    let client = build_client(config)?;
    match client.fetch_with_retry(city, config.api.max_retries) {
        Ok(times) => {
            remember_city(config, city)?;
            Ok(times)
        }
        Err(e) => {
            tracing::error!(city, "Error fetching prayer times: {}", e);
            anyhow::bail!(FETCH_FAILED_MESSAGE)
        }
    }
}
