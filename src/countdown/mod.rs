//! Time-window arithmetic for the İftar/Sahur countdown.
//!
//! Everything in here is pure: callers read the clock once and pass `now`
//! in, together with the day's [`Anchors`]. Both [`resolve`] and
//! [`progress`] decline with `None` instead of failing when the anchors
//! cannot be projected onto the current day.

pub mod progress;
pub mod window;

pub use progress::{format_percentage, progress};
pub use window::{Countdown, CountdownLabel, FastingWindow, Phase, format_remaining, resolve};

use chrono::NaiveTime;
use serde::Serialize;

/// Sahur and İftar clock-times for one day, without a date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchors {
    pub sahur: NaiveTime,
    pub iftar: NaiveTime,
}

impl Anchors {
    /// Sahur must precede İftar on the same calendar day.
    pub fn new(sahur: NaiveTime, iftar: NaiveTime) -> Option<Self> {
        if sahur < iftar {
            Some(Self { sahur, iftar })
        } else {
            None
        }
    }
}

/// Parse an `HH:MM` clock-time. Anything else is treated as absent.
pub fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let (hours, minutes) = s.trim().split_once(':')?;
    if hours.is_empty() || minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}
