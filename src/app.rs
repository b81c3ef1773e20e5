//! Application state threaded through the watch loop.
//!
//! The countdown core is pure; everything that changes over time (the
//! selected city, the fetched times, the last shown countdown) lives here
//! and is only mutated by the three driver messages: a city selection, a
//! finished fetch, and a clock tick.

use crate::countdown::{CountdownLabel, Phase, progress, resolve};
use crate::locale::format_long_date;
use crate::prayer::models::{DailyTimes, PrayerTime};
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum Status {
    Loading,
    Ready,
    Failed(String),
}

/// Ask the driver to fetch `city`; the result must be reported back with
/// the same request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub city: String,
    pub generation: u64,
    /// Local date the request was issued on; the fetched times belong to it.
    pub date: NaiveDate,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub city: String,
    pub date: String,
    pub status: Status,
    pub phase: Option<Phase>,
    pub countdown: Option<String>,
    pub label: Option<CountdownLabel>,
    pub progress: Option<f64>,
    pub times: Vec<PrayerTime>,
}

#[derive(Debug)]
pub struct AppState {
    city: String,
    generation: u64,
    times: Option<DailyTimes>,
    loaded_on: Option<NaiveDate>,
    status: Status,
    last_countdown: Option<(String, CountdownLabel)>,
    refetch_pending: bool,
}

impl AppState {
    pub fn new(city: &str) -> Self {
        Self {
            city: city.to_string(),
            generation: 0,
            times: None,
            loaded_on: None,
            status: Status::Loading,
            last_countdown: None,
            refetch_pending: false,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn times(&self) -> Option<&DailyTimes> {
        self.times.as_ref()
    }

    /// The fetch for the current city and generation, issued on `date`.
    pub fn current_request(&self, date: NaiveDate) -> FetchRequest {
        FetchRequest {
            city: self.city.clone(),
            generation: self.generation,
            date,
        }
    }

    /// Switch cities. Anything fetched for the old city is dropped and
    /// in-flight results for it will be ignored.
    pub fn select_city(&mut self, city: &str, date: NaiveDate) -> FetchRequest {
        self.city = city.to_string();
        self.generation += 1;
        self.times = None;
        self.loaded_on = None;
        self.status = Status::Loading;
        self.last_countdown = None;
        self.refetch_pending = false;
        self.current_request(date)
    }

    /// Apply a finished fetch. Returns `false` if it belonged to an older
    /// request and was discarded.
    ///
    /// The times are dated by when the request was issued, so a fetch that
    /// completes after midnight still triggers the next day's refetch.
    pub fn times_loaded(
        &mut self,
        request: &FetchRequest,
        result: Result<DailyTimes, String>,
    ) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                generation = request.generation,
                current = self.generation,
                "discarding stale prayer times"
            );
            return false;
        }

        self.loaded_on = Some(request.date);
        self.refetch_pending = false;
        match result {
            Ok(times) => {
                self.times = Some(times);
                self.status = Status::Ready;
            }
            Err(message) => {
                self.times = None;
                self.last_countdown = None;
                self.status = Status::Failed(message);
            }
        }
        true
    }

    /// Evaluate one clock tick.
    ///
    /// Also returns a fetch request once the local date has moved past the
    /// day the current times were loaded for.
    pub fn tick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> (Snapshot, Option<FetchRequest>) {
        let today = now.date_naive();

        let refetch = match self.loaded_on {
            Some(day) if day != today && !self.refetch_pending => {
                self.refetch_pending = true;
                self.generation += 1;
                tracing::info!(city = %self.city, "date changed, refreshing prayer times");
                Some(self.current_request(today))
            }
            _ => None,
        };

        let mut phase = None;
        let mut percentage = None;
        if let Some(anchors) = self.times.as_ref().and_then(DailyTimes::anchors) {
            if let Some(countdown) = resolve(now, &anchors) {
                phase = Some(countdown.phase);
                self.last_countdown = Some((countdown.clock(), countdown.label));
            }
            percentage = progress(now, &anchors);
        }

        let snapshot = Snapshot {
            city: self.city.clone(),
            date: format_long_date(today),
            status: self.status.clone(),
            phase,
            countdown: self.last_countdown.as_ref().map(|(clock, _)| clock.clone()),
            label: self.last_countdown.as_ref().map(|(_, label)| *label),
            progress: percentage,
            times: self
                .times
                .as_ref()
                .map(|t| t.entries().to_vec())
                .unwrap_or_default(),
        };

        (snapshot, refetch)
    }
}
