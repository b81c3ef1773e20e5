use super::Anchors;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    BeforeSahur,
    Fasting,
    AfterIftar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownLabel {
    UntilIftar,
    UntilSahur,
}

impl CountdownLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountdownLabel::UntilIftar => "İftara kalan süre",
            CountdownLabel::UntilSahur => "Sahura kalan süre",
        }
    }
}

impl fmt::Display for CountdownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three anchor instants derived from a single reading of `now`.
#[derive(Debug, Clone)]
pub struct FastingWindow<Tz: TimeZone> {
    pub sahur_today: DateTime<Tz>,
    pub iftar_today: DateTime<Tz>,
    pub tomorrow_sahur: DateTime<Tz>,
}

impl<Tz: TimeZone> FastingWindow<Tz> {
    /// Project the anchors onto the calendar day of `now`.
    ///
    /// Returns `None` when a projection does not exist in `now`'s timezone
    /// (a skipped local hour) or the date cannot be advanced.
    pub fn for_day(now: &DateTime<Tz>, anchors: &Anchors) -> Option<Self> {
        let tz = now.timezone();
        let today = now.date_naive();
        let tomorrow = today.succ_opt()?;

        Some(Self {
            sahur_today: project(&tz, today, anchors.sahur)?,
            iftar_today: project(&tz, today, anchors.iftar)?,
            tomorrow_sahur: project(&tz, tomorrow, anchors.sahur)?,
        })
    }

    /// Boundaries belong to the later phase.
    pub fn phase(&self, now: &DateTime<Tz>) -> Phase {
        if *now >= self.iftar_today {
            Phase::AfterIftar
        } else if *now >= self.sahur_today {
            Phase::Fasting
        } else {
            Phase::BeforeSahur
        }
    }
}

fn project<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(time)).earliest()
}

#[derive(Debug, Clone)]
pub struct Countdown<Tz: TimeZone> {
    pub phase: Phase,
    pub target: DateTime<Tz>,
    pub remaining: Duration,
    pub label: CountdownLabel,
}

impl<Tz: TimeZone> Countdown<Tz> {
    /// Remaining time as `HH:MM:SS`.
    pub fn clock(&self) -> String {
        format_remaining(self.remaining)
    }
}

/// Decide what to count down to and how long is left.
pub fn resolve<Tz: TimeZone>(now: &DateTime<Tz>, anchors: &Anchors) -> Option<Countdown<Tz>> {
    let window = FastingWindow::for_day(now, anchors)?;
    let phase = window.phase(now);

    let (target, label) = match phase {
        Phase::AfterIftar => (window.tomorrow_sahur, CountdownLabel::UntilSahur),
        Phase::Fasting => (window.iftar_today, CountdownLabel::UntilIftar),
        Phase::BeforeSahur => (window.sahur_today, CountdownLabel::UntilSahur),
    };

    let remaining = target.clone().signed_duration_since(now);

    Some(Countdown {
        phase,
        target,
        remaining: remaining.max(Duration::zero()),
        label,
    })
}

/// Zero-padded `HH:MM:SS`; the hour field widens past 99.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
